use once_cell::sync::Lazy;
use regex::Regex;

static BOLD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<b>(.*?)</b>").expect("valid bold pattern"));
static STRONG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<strong>(.*?)</strong>").expect("valid strong pattern"));
static ITALIC_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<i>(.*?)</i>").expect("valid italic pattern"));
static EM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<em>(.*?)</em>").expect("valid em pattern"));
static BREAK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<br\s*/?>").expect("valid break pattern"));
static ANY_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("valid tag pattern"));

/// Converts the small HTML subset TBA uses in status strings to markdown.
///
/// Bold and italic tags become `**`/`*` emphasis (matched within a single
/// line), `<br>` becomes a newline and every other tag is dropped.
///
/// # Example
/// ```
/// use robostats::report::html::html_to_markdown;
///
/// let md = html_to_markdown("Team 254 was <b>Rank 1/40</b><br/>with a record of <i>10-0-0</i>");
/// assert_eq!(md, "Team 254 was **Rank 1/40**\nwith a record of *10-0-0*");
/// ```
pub fn html_to_markdown(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }
    let md = BOLD_RE.replace_all(html, "**${1}**");
    let md = STRONG_RE.replace_all(&md, "**${1}**");
    let md = ITALIC_RE.replace_all(&md, "*${1}*");
    let md = EM_RE.replace_all(&md, "*${1}*");
    let md = BREAK_RE.replace_all(&md, "\n");
    let md = ANY_TAG_RE.replace_all(&md, "");
    md.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(html_to_markdown(""), "");
    }

    #[test]
    fn test_case_insensitive_tags() {
        assert_eq!(html_to_markdown("<B>bold</B> and <STRONG>strong</Strong>"), "**bold** and **strong**");
        assert_eq!(html_to_markdown("<EM>x</em> <i>y</I>"), "*x* *y*");
    }

    #[test]
    fn test_breaks_and_unknown_tags() {
        assert_eq!(html_to_markdown("a<br>b<BR />c<br/>d"), "a\nb\nc\nd");
        assert_eq!(
            html_to_markdown(r#"<span class="x">plain</span> <a href="/team/254">link</a>"#),
            "plain link"
        );
    }

    #[test]
    fn test_non_greedy_and_single_line() {
        assert_eq!(html_to_markdown("<b>a</b> mid <b>c</b>"), "**a** mid **c**");
        // emphasis does not span lines; the stray tags are just removed
        assert_eq!(html_to_markdown("<b>a\nb</b>"), "a\nb");
    }

    #[test]
    fn test_trims_result() {
        assert_eq!(html_to_markdown("  <br> text <br>  "), "text");
    }

    #[test]
    fn test_tba_status_string() {
        let status = "Team 118 was <b>Rank 3/40</b> with a record of <b>9-3-0</b> in quals and \
                      was <b>Won the event</b> with a playoff record of <b>8-1-0</b>.";
        assert_eq!(
            html_to_markdown(status),
            "Team 118 was **Rank 3/40** with a record of **9-3-0** in quals and \
             was **Won the event** with a playoff record of **8-1-0**."
        );
    }
}
