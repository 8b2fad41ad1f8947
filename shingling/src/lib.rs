/*!
This library measures document-to-document similarity over a text corpus with
word shingles and [MinHash](https://en.wikipedia.org/wiki/MinHash).

Raw documents are tokenized (lowercased, punctuation stripped), stopwords are
removed, and every run of `k` consecutive tokens becomes a shingle. The
similarity of two documents is the Jaccard similarity of their shingle sets,
computed exactly or estimated from MinHash signatures.


## Example

 ```
 use shingling::text::{build_shingles, filter_stopwords, tokenize, StopwordSet};
 use shingling::minhash::{estimate_jaccard, exact_jaccard};

 let stopwords = StopwordSet::from_lines("the\nis\nand");
 let shingles = |doc: &str| {
     build_shingles(&filter_stopwords(&tokenize(doc), &stopwords), 2).unwrap()
 };
 let a = shingles("The patient is a 45-year-old male with chest pain and shortness of breath.");
 let b = shingles("The patient is a 45-year-old female with chest pain and shortness of breath.");

 let exact = exact_jaccard(&a, &b).unwrap();
 let estimate = estimate_jaccard(&a, &b, 500, 1).unwrap();
 assert!((exact - estimate).abs() < 0.15);
 ```

## References
[[1] Chapter 3, Mining of Massive Datasets](http://www.mmds.org)

 */

pub mod config;
pub mod corpus;
pub mod error;
pub mod minhash;
pub mod text;

pub use self::config::ShinglingConfig;
pub use self::corpus::{CharacteristicMatrix, Corpus, SimilarityReport};
pub use self::error::{Result, ShinglingError};
pub use self::minhash::{estimate_jaccard, exact_jaccard, HashFamily, MinHashSignature, MinHasher};
pub use self::text::{build_shingles, filter_stopwords, tokenize, ShingleSet, StopwordSet};
