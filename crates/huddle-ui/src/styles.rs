//! Stylesheet for the transcript components.
//!
//! Timing lives in the inline `animation` shorthand each element gets;
//! these rules only provide the keyframes and layout.

pub const TRANSCRIPT_STYLES: &str = r#"
/* === Chat Transcript === */
.chat-transcript {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  margin: 0;
  padding: 1rem;
}

.chat-transcript.is-entering,
.chat-transcript.is-exiting {
  pointer-events: none;
}

@keyframes chat-transcript-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

@keyframes chat-transcript-out {
  from { opacity: 1; }
  to { opacity: 0; }
}

/* === Chat Entry === */
.chat-entry {
  display: flex;
  flex-direction: column;
  gap: 0.125rem;
}

.chat-entry-header {
  display: flex;
  align-items: baseline;
  gap: 0.5rem;
  font-size: var(--text-xs, 0.75rem);
  color: var(--text-muted, rgba(245, 245, 245, 0.5));
  opacity: 0;
  transition: opacity var(--transition-fast, 150ms ease);
}

.chat-entry:hover .chat-entry-header {
  opacity: 1;
}

.chat-entry-local .chat-entry-header {
  justify-content: flex-end;
}

.chat-entry-sender {
  font-weight: 600;
  color: var(--text-secondary, rgba(245, 245, 245, 0.7));
}

.chat-entry-edited {
  margin-right: 0.125rem;
}

.chat-entry-bubble {
  max-width: 80%;
  padding: 0.5rem 0.75rem;
  border-radius: 1.25rem;
  line-height: 1.4;
  white-space: pre-wrap;
  overflow-wrap: anywhere;
}

.chat-entry-local .chat-entry-bubble {
  margin-left: auto;
  background: var(--bubble-local, #1f2a33);
}

.chat-entry-remote .chat-entry-bubble {
  margin-right: auto;
}

@keyframes chat-entry-in {
  from { opacity: 0; transform: translateY(var(--entry-offset, 10px)); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes chat-entry-out {
  from { opacity: 1; transform: translateY(0); }
  to { opacity: 0; transform: translateY(var(--entry-offset, 10px)); }
}

@media (prefers-reduced-motion: reduce) {
  .chat-transcript,
  .chat-entry {
    animation-duration: 0.01ms !important;
    animation-delay: 0ms !important;
  }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyframes_match_inline_animation_names() {
        for name in [
            "chat-transcript-in",
            "chat-transcript-out",
            "chat-entry-in",
            "chat-entry-out",
        ] {
            assert!(
                TRANSCRIPT_STYLES.contains(&format!("@keyframes {name} ")),
                "missing keyframes for {name}"
            );
        }
    }
}
