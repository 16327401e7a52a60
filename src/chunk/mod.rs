//! Text chunking
//!
//! Splits document text into bounded-size segments along sentence
//! boundaries. Sentences are accumulated greedily; a chunk is flushed when
//! the next sentence would push it past the size limit. A single sentence
//! longer than the limit is kept whole in its own chunk rather than cut
//! mid-sentence.

/// Split text into sentence-like units.
///
/// A sentence ends at a run of `.`, `!`, or `?` followed by whitespace.
/// The terminator run stays attached to its sentence; the separating
/// whitespace is consumed.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let bytes = text.as_bytes();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if matches!(bytes[i], b'.' | b'!' | b'?') {
            // Consume the full terminator run
            let mut end = i + 1;
            while end < bytes.len() && matches!(bytes[end], b'.' | b'!' | b'?') {
                end += 1;
            }
            if end < bytes.len() && bytes[end].is_ascii_whitespace() {
                sentences.push(&text[start..end]);
                // Skip the separating whitespace
                let mut next = end;
                while next < bytes.len() && bytes[next].is_ascii_whitespace() {
                    next += 1;
                }
                start = next;
                i = next;
                continue;
            }
            i = end;
        } else {
            i += 1;
        }
    }

    if start < text.len() {
        sentences.push(&text[start..]);
    }

    sentences
}

/// Chunk text into segments of at most `max_chars` characters.
///
/// The limit is soft in exactly one case: a single sentence longer than
/// `max_chars` becomes its own oversized chunk. Chunks are trimmed and
/// empty chunks are dropped.
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();

    for sentence in split_sentences(text) {
        let candidate_len = if current.is_empty() {
            sentence.chars().count()
        } else {
            current.chars().count() + 1 + sentence.chars().count()
        };

        if candidate_len > max_chars && !current.is_empty() {
            let trimmed = current.trim();
            if !trimmed.is_empty() {
                chunks.push(trimmed.to_string());
            }
            current = sentence.to_string();
        } else if current.is_empty() {
            current = sentence.to_string();
        } else {
            current.push(' ');
            current.push_str(sentence);
        }
    }

    let trimmed = current.trim();
    if !trimmed.is_empty() {
        chunks.push(trimmed.to_string());
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_short_sentences_one_chunk() {
        let chunks = chunk_text("The cat sat. The dog ran.", 1000);
        assert_eq!(chunks.len(), 1);
        assert!(chunks[0].contains("cat"));
        assert!(chunks[0].contains("dog"));
    }

    #[test]
    fn test_oversized_sentence_kept_whole() {
        let chunks = chunk_text("AAAAAAAAAAAAAAA.", 10);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0], "AAAAAAAAAAAAAAA.");
    }

    #[test]
    fn test_flush_on_overflow() {
        let text = "First sentence here. Second sentence here. Third sentence here.";
        let chunks = chunk_text(text, 25);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0], "First sentence here.");
        assert_eq!(chunks[1], "Second sentence here.");
        assert_eq!(chunks[2], "Third sentence here.");
    }

    #[test]
    fn test_no_characters_lost() {
        let text = "Alpha beta gamma. Delta epsilon zeta! Eta theta iota? Kappa lambda.";
        let chunks = chunk_text(text, 20);

        // Reconstruction modulo whitespace: every non-whitespace char survives
        let original: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        let rebuilt: String = chunks
            .join(" ")
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        assert_eq!(original, rebuilt);
    }

    #[test]
    fn test_empty_input() {
        assert!(chunk_text("", 900).is_empty());
        assert!(chunk_text("   \n\t  ", 900).is_empty());
    }

    #[test]
    fn test_trailing_text_without_terminator() {
        let chunks = chunk_text("Complete sentence. trailing fragment", 1000);
        assert_eq!(chunks.len(), 1);
        assert!(chunks[0].ends_with("trailing fragment"));
    }

    #[test]
    fn test_terminator_runs() {
        let chunks = chunk_text("Really?! Yes. Sure...", 1000);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0], "Really?! Yes. Sure...");
    }

    #[test]
    fn test_chunks_are_trimmed() {
        let chunks = chunk_text("  Padded sentence.  ", 1000);
        assert_eq!(chunks, vec!["Padded sentence.".to_string()]);
    }

    #[test]
    fn test_ordering_preserved() {
        let text = "One one one. Two two two. Three three three. Four four four.";
        let chunks = chunk_text(text, 28);
        assert!(chunks.len() >= 2);
        let joined = chunks.join(" ");
        let one = joined.find("One").unwrap();
        let four = joined.find("Four").unwrap();
        assert!(one < four);
    }
}
