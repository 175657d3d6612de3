//! Delimiter-stack emphasis resolution.
//!
//! Each delimiter kind gets its own pass: the content is split into text
//! fragments and delimiter runs held in a [`TokenList`], runs that can open or
//! close are pushed onto a delimiter stack, and closers are matched against the
//! nearest eligible opener. A match consumes two characters from each run for
//! `<strong>` when both runs have at least two, otherwise one for `<em>`.
//!
//! Not implemented: the "multiple of 3" rule and precedence between `*` and `_`
//! runs that interleave. `*foo**bar**baz*` therefore does not nest the way
//! CommonMark prescribes.

use crate::collections::{NodeId, TokenList, TokenListError};

use super::delimiter::{DelimiterKind, DelimiterPotential, classify};

#[derive(Debug, Clone, Copy)]
struct DelimiterEntry {
    node: NodeId,
    potential: DelimiterPotential,
}

struct EmphasisTags {
    open: &'static str,
    close: &'static str,
    width: usize,
}

const STRONG: EmphasisTags = EmphasisTags {
    open: "<strong>",
    close: "</strong>",
    width: 2,
};

const EM: EmphasisTags = EmphasisTags {
    open: "<em>",
    close: "</em>",
    width: 1,
};

/// Splits `content` into alternating text fragments and maximal runs of the
/// kind's marker, preserving order. Concatenating the result gives `content`.
pub fn tokenize_by_delimiter(content: &str, kind: DelimiterKind) -> TokenList<String> {
    let mut tokens = TokenList::new();
    let mut last = 0;
    for run in kind.run_pattern().find_iter(content) {
        if run.start() > last {
            tokens.append(content[last..run.start()].to_string());
        }
        tokens.append(run.as_str().to_string());
        last = run.end();
    }
    if last < content.len() {
        tokens.append(content[last..].to_string());
    }
    tokens
}

fn neighbour<'a>(
    tokens: &'a TokenList<String>,
    node: Option<NodeId>,
) -> Result<Option<&'a str>, TokenListError> {
    node.map(|id| tokens.get(id).map(String::as_str))
        .transpose()
}

fn build_delimiter_stack(
    tokens: &TokenList<String>,
    kind: DelimiterKind,
) -> Result<TokenList<DelimiterEntry>, TokenListError> {
    let marker = kind.marker();
    let mut stack = TokenList::new();
    for node in tokens.node_ids() {
        if !tokens.get(node)?.starts_with(marker) {
            continue;
        }
        let prev = neighbour(tokens, tokens.prev(node)?)?;
        let next = neighbour(tokens, tokens.next(node)?)?;
        let potential = classify(prev, next, kind);
        if !potential.is_none() {
            stack.append(DelimiterEntry { node, potential });
        }
    }
    Ok(stack)
}

/// Walks down from `closer` looking for an opener, stopping at `bottom`.
fn find_opener(
    stack: &TokenList<DelimiterEntry>,
    closer: NodeId,
    bottom: Option<NodeId>,
) -> Result<Option<NodeId>, TokenListError> {
    let mut candidate = stack.prev(closer)?;
    while let Some(id) = candidate {
        if Some(id) == bottom {
            break;
        }
        if stack.get(id)?.potential.opener {
            return Ok(Some(id));
        }
        candidate = stack.prev(id)?;
    }
    Ok(None)
}

fn resolve_kind(content: &str, kind: DelimiterKind) -> Result<String, TokenListError> {
    let mut tokens = tokenize_by_delimiter(content, kind);
    let mut stack = build_delimiter_stack(&tokens, kind)?;

    let mut opener_bottom: Option<NodeId> = None;
    let mut current = stack.head();

    while let Some(closer_id) = current {
        let closer = *stack.get(closer_id)?;
        if !closer.potential.closer {
            current = stack.next(closer_id)?;
            continue;
        }

        let Some(opener_id) = find_opener(&stack, closer_id, opener_bottom)? else {
            opener_bottom = stack.prev(closer_id)?;
            current = stack.next(closer_id)?;
            continue;
        };

        let opener = *stack.get(opener_id)?;
        let opener_len = tokens.get(opener.node)?.len();
        let closer_len = tokens.get(closer.node)?.len();
        let tags = if opener_len.min(closer_len) >= 2 {
            STRONG
        } else {
            EM
        };

        tokens.get_mut(opener.node)?.truncate(opener_len - tags.width);
        tokens.get_mut(closer.node)?.truncate(closer_len - tags.width);
        tokens.insert_after(opener.node, tags.open.to_string())?;
        tokens.insert_before(closer.node, tags.close.to_string())?;

        if tokens.get(opener.node)?.is_empty() {
            stack.remove(opener_id)?;
        }
        if tokens.get(closer.node)?.is_empty() {
            let next = stack.next(closer_id)?;
            stack.remove(closer_id)?;
            current = next;
        }
        // A closer with characters left is retried against the next opener.
    }

    log::trace!(
        "resolved {:?} emphasis into {} fragments",
        kind,
        tokens.count()
    );
    Ok(tokens.iter().map(String::as_str).collect())
}

/// Rewrites `*`/`_` emphasis in `content` as `<em>`/`<strong>` tags.
///
/// Stars are resolved before underscores; delimiter runs that find no partner
/// are left as literal text.
///
/// # Panics
///
/// Panics if the resolver hands its token list a stale or foreign node
/// handle, which would be a bug in the resolver itself.
pub fn resolve_emphasis(content: &str) -> String {
    DelimiterKind::RESOLUTION_ORDER
        .iter()
        .fold(content.to_string(), |acc, &kind| {
            match resolve_kind(&acc, kind) {
                Ok(resolved) => resolved,
                Err(err) => panic!("emphasis resolver misused its token list: {err}"),
            }
        })
}
