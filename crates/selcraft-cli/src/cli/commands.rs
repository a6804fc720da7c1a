//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("selcraft")
        .about("Build CSS selectors from typed fragments")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(build_command())
        .subcommand(render_command())
}

/// Assemble a selector from fragment flags, applied in command-line order.
pub fn build_command() -> Command {
    Command::new("build")
        .about("Build a selector from fragments")
        .override_usage(
            "\
  selcraft build [FRAGMENTS]... [--then <COMBINATOR> [FRAGMENTS]...]... [--json]",
        )
        .after_help(
            r#"EXAMPLES:
  selcraft build -i main -c container -c editable   # #main.container.editable
  selcraft build -e a -a 'href$=".png"' -p focus    # a[href$=".png"]:focus
  selcraft build -e div -t + -e table -i data       # div + table#data
  selcraft build -e ul -t '>' -e li --json --pretty

Fragments must follow the order element, id, class, attribute,
pseudo-class, pseudo-element within each compound."#,
        )
        .arg(element_arg())
        .arg(id_arg())
        .arg(class_arg())
        .arg(attr_arg())
        .arg(pseudo_class_arg())
        .arg(pseudo_element_arg())
        .arg(then_arg())
        .arg(json_arg())
        .arg(pretty_arg())
}

/// Render a selector tree JSON document to selector text.
pub fn render_command() -> Command {
    Command::new("render")
        .about("Render a selector tree JSON document")
        .after_help(
            r#"EXAMPLES:
  selcraft render selector.json
  selcraft build -e nav -t '>' -e a --json | selcraft render"#,
        )
        .arg(document_arg())
}
