//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Fragment flags keep their command-line order across different kinds
//! 2. `--then` splits the item stream at the right place
//! 3. Repeated singleton flags are accepted by clap (the builder rejects them)

use selcraft_lib::{Fragment, FragmentKind};

use super::*;
use crate::cli::commands::{build_command, render_command};
use crate::commands::build::BuildItem;

fn fragment(kind: FragmentKind, value: &str) -> BuildItem {
    BuildItem::Fragment(Fragment::new(kind, value))
}

fn build_params(args: &[&str]) -> BuildParams {
    let m = build_command()
        .try_get_matches_from(args.iter().copied())
        .unwrap_or_else(|e| panic!("{args:?} should parse: {e}"));
    BuildParams::from_matches(&m)
}

#[test]
fn fragments_keep_command_line_order() {
    let params = build_params(&["build", "-c", "b", "-e", "div", "-c", "a", "-i", "x"]);
    assert_eq!(
        params.items,
        [
            fragment(FragmentKind::Class, "b"),
            fragment(FragmentKind::Element, "div"),
            fragment(FragmentKind::Class, "a"),
            fragment(FragmentKind::Id, "x"),
        ]
    );
}

#[test]
fn long_flags() {
    let params = build_params(&[
        "build",
        "--element",
        "a",
        "--attr",
        "href",
        "--pseudo-class",
        "hover",
        "--pseudo-element",
        "after",
    ]);
    assert_eq!(
        params.items,
        [
            fragment(FragmentKind::Element, "a"),
            fragment(FragmentKind::Attribute, "href"),
            fragment(FragmentKind::PseudoClass, "hover"),
            fragment(FragmentKind::PseudoElement, "after"),
        ]
    );
}

#[test]
fn then_splits_compounds() {
    let params = build_params(&["build", "-e", "div", "-t", "+", "-e", "table", "-i", "data"]);
    assert_eq!(
        params.items,
        [
            fragment(FragmentKind::Element, "div"),
            BuildItem::Combinator("+".to_string()),
            fragment(FragmentKind::Element, "table"),
            fragment(FragmentKind::Id, "data"),
        ]
    );
}

#[test]
fn then_accepts_space_and_hyphen_tokens() {
    let params = build_params(&[
        "build", "-e", "a", "--then", " ", "-e", "b", "-t", "-x-", "-e", "c",
    ]);
    assert_eq!(params.items[1], BuildItem::Combinator(" ".to_string()));
    assert_eq!(params.items[3], BuildItem::Combinator("-x-".to_string()));
}

#[test]
fn repeated_singletons_reach_the_builder() {
    let params = build_params(&["build", "-i", "a", "-i", "b"]);
    assert_eq!(
        params.items,
        [
            fragment(FragmentKind::Id, "a"),
            fragment(FragmentKind::Id, "b"),
        ]
    );
}

#[test]
fn json_flags() {
    let params = build_params(&["build", "-e", "p", "--json", "--pretty"]);
    assert!(params.json);
    assert!(params.pretty);

    let params = build_params(&["build", "-e", "p"]);
    assert!(!params.json);
    assert!(!params.pretty);
}

#[test]
fn pretty_requires_json() {
    let result = build_command().try_get_matches_from(["build", "-e", "p", "--pretty"]);
    assert!(result.is_err());
}

#[test]
fn render_document_optional() {
    let m = render_command()
        .try_get_matches_from(["render", "sel.json"])
        .unwrap();
    assert_eq!(
        RenderParams::from_matches(&m).document,
        Some("sel.json".into())
    );

    let m = render_command().try_get_matches_from(["render"]).unwrap();
    assert_eq!(RenderParams::from_matches(&m).document, None);
}

#[test]
fn verbose_is_global() {
    let m = build_cli()
        .try_get_matches_from(["selcraft", "build", "-e", "p", "-vv"])
        .unwrap();
    assert_eq!(m.get_count("verbose"), 2);
}

#[test]
fn subcommand_required() {
    assert!(build_cli().try_get_matches_from(["selcraft"]).is_err());
}
