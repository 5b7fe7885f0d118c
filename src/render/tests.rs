use super::*;

fn test_links() -> LinkConfig {
    LinkConfig::default()
}

fn record(number: i64, summary: &str) -> RfcRecord {
    RfcRecord {
        number,
        summary: summary.to_string(),
    }
}

#[test]
fn record_url_interpolates_number() {
    let links = test_links();
    assert_eq!(
        record_url(&links, 7821),
        "https://www.rfc-editor.org/rfc/rfc7821.html"
    );
}

#[test]
fn record_url_honors_custom_template() {
    let links = LinkConfig {
        url_template: "https://datatracker.ietf.org/doc/rfc{number}/".to_string(),
    };
    assert_eq!(record_url(&links, 42), "https://datatracker.ietf.org/doc/rfc42/");
}

#[test]
fn html_document_lists_each_record() {
    let links = test_links();
    let records = vec![
        record(7821, "Hello World RFC"),
        record(42, "Networking basics"),
    ];

    let html = html_document(&records, "hello", &links);

    assert!(html.starts_with("<html><body><h1>Search results</h1>"));
    assert!(html.contains("href=\"https://www.rfc-editor.org/rfc/rfc7821.html\">7821</a>"));
    assert!(html.contains("<h3>Hello World RFC</h3>"));
    assert!(html.contains("href=\"https://www.rfc-editor.org/rfc/rfc42.html\">42</a>"));
    assert!(html.contains("<h3>Networking basics</h3>"));
    assert!(html.ends_with("</body></html>\n"));
}

#[test]
fn html_document_escapes_summary_markup() {
    let links = test_links();
    let records = vec![record(1, "<script>alert('x')</script> & \"quotes\"")];

    let html = html_document(&records, "script", &links);

    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; &amp; &quot;quotes&quot;"));
}

#[test]
fn html_document_empty_renders_no_results_affordance() {
    let links = test_links();

    let html = html_document(&[], "xyz", &links);

    assert!(html.contains("No results for &quot;xyz&quot;."));
    assert!(!html.contains("<a "));
}

#[test]
fn html_document_escapes_term_in_empty_state() {
    let links = test_links();

    let html = html_document(&[], "<b>term</b>", &links);

    assert!(html.contains("&lt;b&gt;term&lt;/b&gt;"));
    assert!(!html.contains("<b>term</b>"));
}
