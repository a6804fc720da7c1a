use selcraft_lib::{CompoundSelector, Fragment, SelectorTree, Stringify, builder};

use crate::error::CliError;

/// One command-line item of `selcraft build`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildItem {
    Fragment(Fragment),
    /// Closes the current compound and starts the next.
    Combinator(String),
}

pub struct BuildArgs {
    pub items: Vec<BuildItem>,
    pub json: bool,
    pub pretty: bool,
}

pub fn run(args: BuildArgs) -> Result<(), CliError> {
    let tree = assemble(args.items)?;

    let output = if !args.json {
        tree.stringify()
    } else if args.pretty {
        serde_json::to_string_pretty(&tree)?
    } else {
        serde_json::to_string(&tree)?
    };

    println!("{}", output);
    Ok(())
}

/// Feed items to the builder in order, combining compounds left to right.
pub fn assemble(items: Vec<BuildItem>) -> Result<SelectorTree, CliError> {
    let mut compounds = vec![CompoundSelector::new()];
    let mut combinators = Vec::new();

    for item in items {
        match item {
            BuildItem::Fragment(Fragment { kind, value }) => {
                let position = compounds.len();
                let Some(current) = compounds.last_mut() else {
                    return Err(CliError::NoFragments);
                };
                current.push(kind, value).inspect_err(|err| {
                    tracing::info!(position, "compound rejected: {err}");
                })?;
            }
            BuildItem::Combinator(combinator) => {
                combinators.push(combinator);
                compounds.push(CompoundSelector::new());
            }
        }
    }

    if combinators.is_empty() && compounds.iter().all(CompoundSelector::is_empty) {
        return Err(CliError::NoFragments);
    }
    if let Some(index) = compounds.iter().position(CompoundSelector::is_empty) {
        return Err(CliError::EmptyCompound {
            position: index + 1,
        });
    }

    tracing::debug!(compounds = compounds.len(), "assembling selector");

    let mut compounds = compounds.into_iter();
    let Some(first) = compounds.next() else {
        return Err(CliError::NoFragments);
    };

    let tree = combinators
        .into_iter()
        .zip(compounds)
        .fold(SelectorTree::from(first), |left, (combinator, right)| {
            builder::combine(left, combinator, SelectorTree::from(right)).into()
        });

    Ok(tree)
}
