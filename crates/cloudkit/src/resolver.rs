//! Resolution of a user-supplied identifier into exactly one resource.
//!
//! The resolver fetches the full collection for a kind, disambiguates an
//! id-or-name token against it (prompting interactively when no token was
//! given), and returns exactly one resource or a typed error. It never
//! silently returns a wrong resource: a name shared by several resources
//! is rejected, because the numeric id is the only reliable
//! disambiguator in that case.

use crate::api::ApiClient;
use crate::console::{Console, Input};
use crate::context::CommandContext;
use crate::error::{Error, Result};
use crate::types::{Resource, ResourceKind};

/// Resolve a resource of `kind` from the command's identifier argument.
///
/// Reads the identifier from the input surface under the kind's argument
/// name, then delegates to [`resolve_token`].
pub fn resolve(ctx: &CommandContext<'_>, kind: ResourceKind, prompt: &str) -> Result<Resource> {
    let token = ctx.input().argument(kind.arg_name());
    resolve_token(ctx, kind, token.as_deref(), prompt)
}

/// Resolve a resource of `kind` from an explicit token.
///
/// # Errors
///
/// - [`Error::EmptyCollection`] when no resources of the kind exist,
///   regardless of interactivity.
/// - [`Error::MissingArgument`] when no token was given and the session
///   is non-interactive.
/// - [`Error::AmbiguousIdentifier`] when a name token matches more than
///   one resource.
/// - [`Error::NotFound`] when the token matches nothing.
pub fn resolve_token(
    ctx: &CommandContext<'_>,
    kind: ResourceKind,
    token: Option<&str>,
    prompt: &str,
) -> Result<Resource> {
    let collection = ctx.api().list(kind, ctx.scope())?;
    if collection.is_empty() {
        return Err(Error::EmptyCollection { kind });
    }

    let token = match token {
        Some(token) => token,
        None if ctx.input().is_interactive() => {
            // Name-keyed choice list; ids keep duplicate names tellable
            // apart. The selection maps straight back to the element, so
            // no token lookup happens on this path.
            let labels: Vec<String> = collection
                .iter()
                .map(|resource| format!("{} (#{})", resource.name, resource.id))
                .collect();
            let index = ctx.console().choose(prompt, &labels)?;
            return Ok(collection.items()[index].clone());
        }
        None => {
            return Err(Error::MissingArgument {
                name: kind.arg_name().to_string(),
            });
        }
    };

    // Id check precedes name check: a numeric token always resolves
    // against id-space first, even if some resource's name equals it.
    if let Ok(id) = token.parse::<u64>() {
        if let Some(resource) = collection.first_where_id(id) {
            return Ok(resource.clone());
        }
    }

    let matches = collection.where_name(token);
    match matches.len() {
        0 => Err(Error::NotFound {
            kind,
            token: token.to_string(),
        }),
        1 => Ok(matches[0].clone()),
        count => Err(Error::AmbiguousIdentifier {
            name: token.to_string(),
            count,
        }),
    }
}
