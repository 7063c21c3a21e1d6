use xi_rope::Rope;

use super::RenderOptions;
use crate::{
    escape::escape_html,
    parsing::{
        blocks::{BlockKind, BlockNode, kinds::Paragraph},
        inline::transform_inline,
        rope::{slice_to_string, span::Span},
    },
};

/// Turns the flat block list into one HTML string per output element.
///
/// Runs of list items on consecutive lines are grouped into one list, and a
/// table header is grouped with the rows that follow it.
pub(super) fn write_blocks(rope: &Rope, blocks: &[BlockNode], opts: RenderOptions) -> Vec<String> {
    let mut out = Vec::new();
    let mut i = 0;
    while i < blocks.len() {
        let b = &blocks[i];
        i = match &b.kind {
            BlockKind::Heading { level } => {
                let text = inline(rope, b.content_span);
                out.push(format!("<h{level}>{text}</h{level}>"));
                i + 1
            }
            BlockKind::BlockQuote => {
                let text = inline(rope, b.content_span);
                out.push(format!("<blockquote>{text}</blockquote>"));
                i + 1
            }
            BlockKind::FencedCode { lang } => {
                out.push(write_code(rope, b.content_span, *lang, opts));
                i + 1
            }
            BlockKind::Paragraph => {
                out.push(write_paragraph(rope, b.content_span));
                i + 1
            }
            BlockKind::UnorderedListItem | BlockKind::OrderedListItem => {
                let end = list_run_end(blocks, i);
                out.push(write_list(rope, &blocks[i..end], opts));
                end
            }
            BlockKind::TableHeader { cells } => {
                let end = blocks[i + 1..]
                    .iter()
                    .position(|r| !matches!(r.kind, BlockKind::TableRow { .. }))
                    .map_or(blocks.len(), |p| i + 1 + p);
                out.push(write_table(rope, cells, &blocks[i + 1..end]));
                end
            }
            // Rows are consumed together with their header.
            BlockKind::TableRow { .. } => i + 1,
        };
    }
    out
}

/// Index one past the last item of the run starting at `start`: same list
/// kind, each on the line right after the previous one.
fn list_run_end(blocks: &[BlockNode], start: usize) -> usize {
    let kind = &blocks[start].kind;
    let mut end = start + 1;
    while end < blocks.len()
        && &blocks[end].kind == kind
        && blocks[end - 1].span.abuts(blocks[end].span)
    {
        end += 1;
    }
    end
}

fn write_list(rope: &Rope, items: &[BlockNode], opts: RenderOptions) -> String {
    let body = items
        .iter()
        .map(|item| format!("<li>{}</li>", inline(rope, item.content_span)))
        .collect::<Vec<_>>()
        .join("\n");

    match items[0].kind {
        BlockKind::UnorderedListItem => format!("<ul>{body}</ul>"),
        BlockKind::OrderedListItem if opts.wrap_ordered_lists => format!("<ol>{body}</ol>"),
        _ => body,
    }
}

fn write_table(rope: &Rope, header: &[Span], rows: &[BlockNode]) -> String {
    let mut html = String::from("<table><thead><tr>");
    for cell in header {
        html.push_str(&format!("<th>{}</th>", inline(rope, *cell)));
    }
    html.push_str("</tr></thead><tbody>");
    for row in rows {
        let BlockKind::TableRow { cells } = &row.kind else {
            continue;
        };
        html.push_str("<tr>");
        for cell in cells {
            html.push_str(&format!("<td>{}</td>", inline(rope, *cell)));
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");
    html
}

fn write_code(rope: &Rope, body: Span, lang: Option<Span>, opts: RenderOptions) -> String {
    let body = slice_to_string(rope, body);
    // Surrounding blank lines go; indentation of the first line stays.
    let body = escape_html(body.trim_start_matches(['\r', '\n']).trim_end());
    match lang {
        Some(lang) if opts.code_language_class => {
            let lang = slice_to_string(rope, lang);
            format!(
                "<pre><code class=\"language-{}\">{body}</code></pre>",
                escape_html(&lang)
            )
        }
        _ => format!("<pre><code>{body}</code></pre>"),
    }
}

fn write_paragraph(rope: &Rope, content: Span) -> String {
    let text = slice_to_string(rope, content);
    let lines = Paragraph::lines(&text).collect::<Vec<_>>().join("\n");
    format!("<p>{}</p>", transform_inline(&lines))
}

fn inline(rope: &Rope, sp: Span) -> String {
    transform_inline(&slice_to_string(rope, sp))
}
