//! Closed-class word lists for the lexicon tagger.
//!
//! Anything not listed here (and not caught by a suffix rule) is tagged as a
//! noun, so the lists lean towards function words and the verbs/adjectives
//! that show up in job ads.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::PartOfSpeech;

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "any", "some", "no",
    "all", "both", "either", "neither", "another", "such", "my", "your", "our", "their", "his",
    "her", "its", "whose", "which", "what", "whatever",
];

const PRONOUNS: &[&str] = &[
    "i", "me", "you", "he", "him", "she", "it", "we", "us", "they", "them", "myself",
    "yourself", "yourselves", "ourselves", "themselves", "itself", "who", "whom", "someone",
    "anyone", "everyone", "something", "anything", "everything", "nothing", "yours", "ours",
    "theirs",
];

const ADPOSITIONS: &[&str] = &[
    "in", "on", "at", "by", "for", "with", "about", "against", "between", "into", "through",
    "during", "before", "after", "above", "below", "to", "from", "up", "down", "of", "off",
    "over", "under", "within", "without", "across", "along", "among", "around", "behind",
    "beyond", "like", "near", "per", "since", "toward", "towards", "upon", "via", "including",
    "as", "onto", "throughout", "alongside",
];

const CONJUNCTIONS: &[&str] = &[
    "and", "or", "but", "nor", "so", "yet", "if", "because", "while", "although", "though",
    "whether", "than", "unless", "until", "whereas", "plus", "where", "when", "how", "why",
];

const VERBS: &[&str] = &[
    // auxiliaries and modals
    "be", "is", "am", "are", "was", "were", "been", "being", "have", "has", "had", "having",
    "do", "does", "did", "doing", "will", "would", "shall", "should", "can", "could", "may",
    "might", "must", "get", "gets", "getting",
    // verbs common in job ads that are rarely skills
    "join", "joins", "joining", "seek", "seeks", "seeking", "look", "looks", "looking", "want",
    "wants", "help", "helps", "helping", "ensure", "ensures", "ensuring", "develop",
    "develops", "maintain", "maintains", "collaborate", "collaborates", "collaborating",
    "deliver", "delivers", "write", "writes", "apply", "applies", "use", "uses", "using",
    "create", "creates", "implement", "implements", "provide", "provides", "understand",
    "understands", "communicate", "communicates", "thrive", "thrives", "love", "loves",
    "enjoy", "enjoys", "bring", "brings", "know", "knows", "drive", "drives", "own", "owns",
    "partner", "contribute", "contributes", "grow", "grows", "make", "makes", "take", "takes",
    "work", "working", "include", "includes", "hire", "hiring", "report", "reports", "lead",
    "leads", "mentor", "mentors", "participate", "participates", "define", "defines",
    "identify", "identifies", "improve", "improves", "translate", "translates",
];

const ADJECTIVES: &[&str] = &[
    "strong", "excellent", "good", "great", "solid", "proven", "senior", "junior", "new",
    "other", "key", "able", "familiar", "comfortable", "proficient", "hands-on", "relevant",
    "preferred", "required", "nice", "ideal", "various", "multiple", "several", "many", "much",
    "more", "most", "less", "least", "high", "large", "small", "fast", "fast-paced",
    "independent", "similar", "related", "technical", "effective", "detail-oriented",
    "self-motivated", "cross-functional", "outstanding", "exceptional", "deep", "broad",
    "basic", "advanced", "modern", "bonus", "equivalent", "minimum", "plus", "willing",
    "eager", "passionate", "dynamic", "motivated", "creative", "analytical", "complex",
    "critical", "clear", "written", "verbal", "remote", "hybrid", "full-time", "part-time",
    "preferred", "desired", "optional", "mandatory", "essential", "responsible", "best",
    "better", "top", "same", "own", "following", "additional", "current", "ongoing",
];

const ADVERBS: &[&str] = &[
    "also", "very", "well", "not", "just", "only", "even", "still", "always", "often", "never",
    "ever", "too", "here", "there", "now", "then", "again", "already", "soon", "together",
    "etc", "e.g", "i.e", "eg", "ie",
];

const NUMERALS: &[&str] = &[
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "dozen",
    "hundred", "thousand",
];

/// Words whose suffix would otherwise mis-tag them.
pub(crate) const NOUN_EXCEPTIONS: &[&str] = &[
    "supply", "family", "assembly", "anomaly", "reply", "italy", "monopoly", "ally", "rally",
    "table", "cable", "variable", "variables", "deliverable", "deliverables", "timetable",
    "bed", "speed", "seed", "feed", "embed", "need", "red", "shed", "fed",
];

/// Word → tag lookup. Earlier lists win when a word appears twice.
pub(crate) static LEXICON: LazyLock<HashMap<&'static str, PartOfSpeech>> = LazyLock::new(|| {
    let groups: [(&[&str], PartOfSpeech); 8] = [
        (DETERMINERS, PartOfSpeech::Determiner),
        (PRONOUNS, PartOfSpeech::Pronoun),
        (ADPOSITIONS, PartOfSpeech::Adposition),
        (CONJUNCTIONS, PartOfSpeech::Conjunction),
        (VERBS, PartOfSpeech::Verb),
        (ADJECTIVES, PartOfSpeech::Adjective),
        (ADVERBS, PartOfSpeech::Adverb),
        (NUMERALS, PartOfSpeech::Numeral),
    ];

    let mut map = HashMap::new();
    for (words, pos) in groups {
        for word in words {
            map.entry(*word).or_insert(pos);
        }
    }
    map
});
