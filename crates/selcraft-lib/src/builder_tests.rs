use super::*;
use crate::{Combinator, FragmentKind};

#[test]
fn entry_points_start_fresh_selectors() {
    let cases = [
        (element("div").unwrap(), "div", FragmentKind::Element),
        (id("main").unwrap(), "#main", FragmentKind::Id),
        (class("big").unwrap(), ".big", FragmentKind::Class),
        (attr("href").unwrap(), "[href]", FragmentKind::Attribute),
        (pseudo_class("hover").unwrap(), ":hover", FragmentKind::PseudoClass),
        (
            pseudo_element("before").unwrap(),
            "::before",
            FragmentKind::PseudoElement,
        ),
    ];

    for (sel, text, kind) in cases {
        assert_eq!(sel.stringify(), text);
        assert_eq!(sel.fragments().len(), 1);
        assert_eq!(sel.last_kind(), Some(kind));
    }
}

#[test]
fn combine_formula() {
    let left = element("ul").unwrap().class("nav").unwrap();
    let right = element("li").unwrap().pseudo_class("first-child").unwrap();

    for token in ["+", "~", ">", " ", "", "||", "weird token"] {
        let sel = combine(&left, token, &right);
        assert_eq!(
            sel.stringify(),
            format!("{} {} {}", left.stringify(), token, right.stringify())
        );
    }
}

#[test]
fn combine_does_not_touch_operands() {
    let div = element("div").unwrap();
    let p = element("p").unwrap();

    let child = combine(&div, Combinator::Child, &p);
    let sibling = combine(&div, Combinator::SubsequentSibling, &p);

    assert_eq!(child.stringify(), "div > p");
    assert_eq!(sibling.stringify(), "div ~ p");
    assert_eq!(div.stringify(), "div");
    assert_eq!(p.stringify(), "p");
}

#[test]
fn descendant_token_keeps_padding() {
    let sel = combine(
        element("nav").unwrap(),
        Combinator::Descendant,
        element("a").unwrap(),
    );
    assert_eq!(sel.stringify(), "nav   a");
}

#[test]
fn nested_combines() {
    let inner = combine(element("a").unwrap(), ">", element("b").unwrap());
    let outer = combine(inner, "+", class("c").unwrap());
    let deeper = combine(id("root").unwrap(), "~", &outer);

    assert_eq!(outer.stringify(), "a > b + .c");
    assert_eq!(deeper.stringify(), "#root ~ a > b + .c");
    assert_eq!(deeper.to_string(), deeper.stringify());
}

#[test]
fn combined_parts() {
    let sel = combine(element("a").unwrap(), "+", element("b").unwrap());
    assert_eq!(sel.left().stringify(), "a");
    assert_eq!(sel.combinator(), "+");
    assert_eq!(sel.right().stringify(), "b");

    let (left, combinator, right) = sel.into_parts();
    assert_eq!((left.as_str(), combinator.as_str(), right.as_str()), ("a", "+", "b"));
}

#[test]
fn boxed_operands() {
    let left: Box<dyn Stringify> = Box::new(element("h1").unwrap());
    let right: Box<dyn Stringify> = Box::new(combine(
        element("p").unwrap(),
        ">",
        element("em").unwrap(),
    ));
    assert_eq!(combine(left, "+", right).stringify(), "h1 + p > em");
}

#[test]
fn combinator_tokens() {
    for combinator in [
        Combinator::Descendant,
        Combinator::Child,
        Combinator::NextSibling,
        Combinator::SubsequentSibling,
    ] {
        assert_eq!(Combinator::from_token(combinator.as_str()), Some(combinator));
        assert_eq!(combinator.to_string(), combinator.as_str());
    }
    assert_eq!(Combinator::from_token(">>"), None);
}
