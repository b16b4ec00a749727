use hitomi_metadata::{extract_html, Error};

#[test]
fn empty_document_is_structure_mismatch() {
    assert!(matches!(
        extract_html(""),
        Err(Error::StructureMismatch { field: "title", .. })
    ));
}

#[test]
fn plain_article_is_not_a_gallery() {
    let html = "<html><body><article><h1>News</h1><p>text</p></article></body></html>";
    assert!(matches!(extract_html(html), Err(Error::StructureMismatch { .. })));
}

#[test]
fn malformed_markup_does_not_panic() {
    for html in [
        "<div class=\"gallery\"><h1>unclosed",
        "<div class=\"gallery\"><table><tr><td><a>x",
        "<div class=\"gallery test id=broken>",
        "&amp text &lt;",
        "<div class=\"gallery-preview\"><script>'//a/b/c.jpg.jpg',",
    ] {
        let result = extract_html(html);
        assert!(
            matches!(result, Err(Error::StructureMismatch { .. } | Error::NoPagesFound)),
            "unexpected result for {html:?}: {result:?}"
        );
    }
}

#[test]
fn fields_are_checked_before_pages() {
    // valid script but no gallery container: the field error wins
    let html = r#"<div class="gallery-preview"><script>
'//tn.hitomi.la/smalltn/1/1.jpg.jpg',
</script></div>"#;
    assert!(matches!(
        extract_html(html),
        Err(Error::StructureMismatch { field: "title", .. })
    ));
}

#[test]
fn missing_preview_script_is_structure_mismatch() {
    let html = r#"<div class="gallery"><h1>t</h1><h2></h2><table>
        <tr><td>Group</td></tr>
        <tr><td><a>manga</a></td></tr>
        <tr><td><a>english</a></td></tr>
        <tr><td><ul><li>tag</li></ul></td></tr>
    </table></div>"#;
    assert!(matches!(
        extract_html(html),
        Err(Error::StructureMismatch { field: "pages", .. })
    ));
}

#[test]
fn short_thumbnail_names_are_skipped() {
    let html = r#"<div class="gallery"><h1>t</h1><h2></h2><table>
        <tr><td>Group</td></tr>
        <tr><td><a>manga</a></td></tr>
        <tr><td><a>english</a></td></tr>
        <tr><td></td></tr>
    </table></div>
    <div class="gallery-preview"><script>
'//tn.hitomi.la/smalltn/1/.jpg',
'//tn.hitomi.la/smalltn/1/2.jpg.jpg',
</script></div>"#;
    let record = extract_html(html).expect("expected Ok(_)");
    assert_eq!(record.pages().len(), 1);
    assert_eq!(record.cover().path(), "/galleries/1/2.jpg");
}

#[test]
fn reserved_characters_in_page_names_stay_in_the_path() {
    let html = r#"<div class="gallery"><h1>t</h1><h2></h2><table>
        <tr><td>Group</td></tr>
        <tr><td><a>manga</a></td></tr>
        <tr><td><a>english</a></td></tr>
        <tr><td></td></tr>
    </table></div>
    <div class="gallery-preview"><script>
'//tn.hitomi.la/smalltn/1/01 #1.jpg.jpg',
'//tn.hitomi.la/smalltn/1/a?b.jpg.jpg',
</script></div>"#;
    let record = extract_html(html).expect("expected Ok(_)");
    let pages = record.pages();

    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].path(), "/galleries/1/01%20%231.jpg");
    assert_eq!(pages[0].fragment(), None);
    assert_eq!(pages[1].path(), "/galleries/1/a%3Fb.jpg");
    assert_eq!(pages[1].query(), None);
}
