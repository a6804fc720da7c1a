//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! Fragment flags of different kinds are separate clap args, so their relative
//! order is recovered from `indices_of` before anything reaches the builder.

use std::path::PathBuf;

use clap::ArgMatches;
use selcraft_lib::Fragment;

use super::args::FRAGMENT_ARGS;
use crate::commands::build::{BuildArgs, BuildItem};
use crate::commands::render::RenderArgs;

pub struct BuildParams {
    pub items: Vec<BuildItem>,
    pub json: bool,
    pub pretty: bool,
}

impl BuildParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            items: ordered_items(m),
            json: m.get_flag("json"),
            pretty: m.get_flag("pretty"),
        }
    }
}

impl From<BuildParams> for BuildArgs {
    fn from(p: BuildParams) -> Self {
        Self {
            items: p.items,
            json: p.json,
            pretty: p.pretty,
        }
    }
}

pub struct RenderParams {
    pub document: Option<PathBuf>,
}

impl RenderParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            document: m.get_one::<PathBuf>("document").cloned(),
        }
    }
}

impl From<RenderParams> for RenderArgs {
    fn from(p: RenderParams) -> Self {
        Self {
            document: p.document,
        }
    }
}

/// Fragments and combinators in the order they appeared on the command line.
fn ordered_items(m: &ArgMatches) -> Vec<BuildItem> {
    let mut items = Vec::new();

    for (id, kind) in FRAGMENT_ARGS {
        items.extend(
            indexed_values(m, id)
                .map(|(index, value)| (index, BuildItem::Fragment(Fragment::new(kind, value)))),
        );
    }
    items.extend(
        indexed_values(m, "then").map(|(index, value)| (index, BuildItem::Combinator(value))),
    );

    items.sort_by_key(|(index, _)| *index);
    items.into_iter().map(|(_, item)| item).collect()
}

fn indexed_values<'a>(
    m: &'a ArgMatches,
    id: &'static str,
) -> impl Iterator<Item = (usize, String)> + 'a {
    let values = m.get_many::<String>(id).into_iter().flatten().cloned();
    let indices = m.indices_of(id).into_iter().flatten();
    indices.zip(values)
}
