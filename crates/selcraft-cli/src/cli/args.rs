//! Shared argument builders for CLI commands.
//!
//! Fragment args are all repeatable so that duplicates reach the selector
//! validator instead of being rejected by clap.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};
use selcraft_lib::FragmentKind;

/// Fragment arg ids paired with the kind they produce.
pub const FRAGMENT_ARGS: [(&str, FragmentKind); 6] = [
    ("element", FragmentKind::Element),
    ("id", FragmentKind::Id),
    ("class", FragmentKind::Class),
    ("attr", FragmentKind::Attribute),
    ("pseudo_class", FragmentKind::PseudoClass),
    ("pseudo_element", FragmentKind::PseudoElement),
];

fn fragment_arg(id: &'static str, short: char, long: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .short(short)
        .long(long)
        .value_name("VALUE")
        .action(ArgAction::Append)
        .help(help)
}

/// Type selector (-e/--element).
pub fn element_arg() -> Arg {
    fragment_arg("element", 'e', "element", "Element name, e.g. `div`")
}

/// Id selector (-i/--id).
pub fn id_arg() -> Arg {
    fragment_arg("id", 'i', "id", "Id, rendered as `#VALUE`")
}

/// Class selector (-c/--class).
pub fn class_arg() -> Arg {
    fragment_arg("class", 'c', "class", "Class, rendered as `.VALUE`")
}

/// Attribute selector (-a/--attr).
pub fn attr_arg() -> Arg {
    fragment_arg(
        "attr",
        'a',
        "attr",
        "Attribute condition, rendered as `[VALUE]`",
    )
}

/// Pseudo-class (-p/--pseudo-class).
pub fn pseudo_class_arg() -> Arg {
    fragment_arg(
        "pseudo_class",
        'p',
        "pseudo-class",
        "Pseudo-class, rendered as `:VALUE`",
    )
}

/// Pseudo-element (-P/--pseudo-element).
pub fn pseudo_element_arg() -> Arg {
    fragment_arg(
        "pseudo_element",
        'P',
        "pseudo-element",
        "Pseudo-element, rendered as `::VALUE`",
    )
}

/// Combinator closing the current compound (-t/--then).
pub fn then_arg() -> Arg {
    Arg::new("then")
        .short('t')
        .long("then")
        .value_name("COMBINATOR")
        .action(ArgAction::Append)
        .allow_hyphen_values(true)
        .help("Combine with the following fragments (`' '`, `>`, `+`, `~` or any text)")
}

/// Emit the selector tree as JSON (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print the selector tree as JSON instead of selector text")
}

/// Pretty-print JSON output (--pretty).
pub fn pretty_arg() -> Arg {
    Arg::new("pretty")
        .long("pretty")
        .action(ArgAction::SetTrue)
        .requires("json")
        .help("Pretty-print JSON output")
}

/// Selector tree document (positional, "-" for stdin).
pub fn document_arg() -> Arg {
    Arg::new("document")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Selector tree JSON file (reads stdin when absent or `-`)")
}

/// Verbosity level (-v, -vv, -vvv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .global(true)
        .help("Verbosity level (-v info, -vv debug, -vvv trace); RUST_LOG overrides")
}
