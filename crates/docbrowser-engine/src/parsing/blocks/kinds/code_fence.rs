use crate::parsing::rope::span::Span;

/// A line that looks like a fence opener or closer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceSig {
    /// Info string after the backticks, trimmed, relative to the line start.
    /// `None` when the fence carries no language tag.
    pub info: Option<Span>,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    pub fn sig(line: &str) -> Option<FenceSig> {
        let rest = line.strip_prefix(Self::BACKTICKS)?;
        let lead = rest.len() - rest.trim_start().len();
        let tag = rest.trim();
        let info = (!tag.is_empty()).then(|| {
            let start = Self::BACKTICKS.len() + lead;
            Span::new(start, start + tag.len())
        });
        Some(FenceSig { info })
    }

    /// Any backtick fence line closes an open fence.
    pub fn closes(sig: Option<FenceSig>) -> bool {
        sig.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_backtick_fence() {
        let line = "```rust";
        let sig = CodeFence::sig(line).unwrap();
        let info = sig.info.unwrap();
        assert_eq!(&line[info.start..info.end], "rust");
    }

    #[test]
    fn fence_without_tag() {
        assert_eq!(CodeFence::sig("```"), Some(FenceSig { info: None }));
        assert_eq!(CodeFence::sig("```   "), Some(FenceSig { info: None }));
    }

    #[test]
    fn tag_is_trimmed() {
        let line = "```  python  ";
        let info = CodeFence::sig(line).unwrap().info.unwrap();
        assert_eq!(&line[info.start..info.end], "python");
    }

    #[test]
    fn tildes_are_not_fences() {
        assert_eq!(CodeFence::sig("~~~"), None);
    }

    #[test]
    fn no_fence() {
        assert_eq!(CodeFence::sig("hello"), None);
        assert_eq!(CodeFence::sig("``not"), None);
    }

    #[test]
    fn closes_on_any_fence_line() {
        assert!(CodeFence::closes(CodeFence::sig("```")));
        assert!(!CodeFence::closes(CodeFence::sig("text")));
    }
}
