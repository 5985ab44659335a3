use markdom::{render_to_string, Element};

#[test]
fn test_render_nested_tree() {
    let root = Element::div()
        .class("grid")
        .child(Element::text("one"))
        .child(Element::span().class("muted").with_text("two"));

    assert_eq!(
        render_to_string(&root),
        "<div class=\"grid\"><span>one</span><span class=\"muted\">two</span></div>"
    );
}

#[test]
fn test_render_data_attributes_sorted() {
    let el = Element::div()
        .data("sortable", "true")
        .data("id", "title")
        .data("order", "desc");

    assert_eq!(
        render_to_string(&el),
        "<div data-id=\"title\" data-order=\"desc\" data-sortable=\"true\"></div>"
    );
}

#[test]
fn test_render_anchor_with_href() {
    let el = Element::anchor("/products/42")
        .class("row")
        .with_text("see");

    assert_eq!(
        render_to_string(&el),
        "<a class=\"row\" href=\"/products/42\">see</a>"
    );
}

#[test]
fn test_render_escapes_attribute_values() {
    let el = Element::anchor("/q?a=1&b=2");

    assert_eq!(
        render_to_string(&el),
        "<a href=\"/q?a=1&amp;b=2\"></a>"
    );
}
