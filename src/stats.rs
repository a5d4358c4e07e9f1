//! Pure TF / IDF / TF-IDF math.
//!
//! No I/O, no shared state. Every function here is order-independent over
//! its inputs, so the coordinator may feed it results in any arrival order.

use indexmap::IndexSet;

use crate::document::{DocumentResult, TermWeights, WordCount};

/// Term frequency for one document: `count(term) / total`.
///
/// An empty document yields an empty map rather than dividing by zero.
pub fn term_frequency(word_count: &WordCount) -> TermWeights {
    let total = word_count.total();
    if total == 0 {
        return TermWeights::new();
    }
    let total = total as f64;
    word_count
        .iter()
        .map(|(term, count)| (term.to_string(), count as f64 / total))
        .collect()
}

/// Union of all terms seen across the corpus.
pub fn vocabulary(corpus: &[DocumentResult]) -> IndexSet<String> {
    let mut vocab = IndexSet::new();
    for result in corpus {
        for term in result.word_count.terms() {
            if !vocab.contains(term) {
                vocab.insert(term.to_string());
            }
        }
    }
    vocab
}

/// Inverse document frequency over the complete corpus.
///
/// `idf(term) = ln(total_documents / documents_with_term)`, 0.0 when no
/// document contains the term. Must only be called once the corpus is
/// complete; a partial corpus makes every value statistically meaningless.
pub fn inverse_document_frequency(
    corpus: &[DocumentResult],
    vocabulary: &IndexSet<String>,
) -> TermWeights {
    let total_documents = corpus.len() as f64;
    let mut idf = TermWeights::with_capacity(vocabulary.len());
    for term in vocabulary {
        let documents_with_term = corpus
            .iter()
            .filter(|result| result.word_count.contains_term(term))
            .count();
        let value = if documents_with_term > 0 {
            (total_documents / documents_with_term as f64).ln()
        } else {
            0.0
        };
        idf.insert(term.clone(), value);
    }
    idf
}

/// TF-IDF for one document: `tf[term] * idf[term]`, 0.0 for terms the IDF
/// map does not carry.
pub fn tf_idf(tf: &TermWeights, idf: &TermWeights) -> TermWeights {
    tf.iter()
        .map(|(term, tf_value)| {
            let idf_value = idf.get(term).copied().unwrap_or(0.0);
            (term.clone(), tf_value * idf_value)
        })
        .collect()
}
