use webdom::{to_html, to_html_pretty, Element};

#[test]
fn test_attribute_order() {
    let el = Element::checkbox_input()
        .attr("name", "agree")
        .id("agree")
        .class("w-4 h-4")
        .checked(true)
        .required(true);

    assert_eq!(
        to_html(&el),
        r#"<input id="agree" class="w-4 h-4" name="agree" type="checkbox" checked required />"#
    );
}

#[test]
fn test_empty_class_list_is_omitted() {
    let el = Element::div().class("").class("   ");
    assert_eq!(to_html(&el), "<div></div>");
}

#[test]
fn test_nested_and_escaped() {
    let el = Element::label()
        .attr("for", "x")
        .child(Element::text("Fish & <Chips>"));
    assert_eq!(
        to_html(&el),
        r#"<label for="x"><span>Fish &amp; &lt;Chips&gt;</span></label>"#
    );
}

#[test]
fn test_pretty_indents_children() {
    let el = Element::div().child(Element::div().child(Element::checkbox_input()));
    let pretty = to_html_pretty(&el);
    let lines: Vec<&str> = pretty.lines().collect();
    assert_eq!(lines[0], "<div>");
    assert_eq!(lines[1], "  <div>");
    assert_eq!(lines[2], r#"    <input type="checkbox" />"#);
    assert_eq!(lines[3], "  </div>");
    assert_eq!(lines[4], "</div>");
}
