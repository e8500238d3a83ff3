// Static word lists and pattern sources
// Closed vocabularies used to build the pattern tables

/// Irregular simple-past forms recognised by `SimplePastPositive`
///
/// Regular `-ed` forms are not matched.
pub const IRREGULAR_PAST_VERBS: &[&str] = &[
    "ate", "began", "broke", "brought", "built", "bought", "caught", "chose", "came", "did",
    "drew", "drank", "drove", "fell", "felt", "fought", "found", "flew", "forgot", "got", "gave",
    "went", "grew", "had", "heard", "held", "kept", "knew", "left", "let", "lay", "lost", "made",
    "meant", "met", "paid", "put", "quit", "read", "rode", "rang", "rose", "ran", "said", "saw",
    "sold", "sent", "set", "shook", "shot", "showed", "shut", "sang", "sank", "sat", "slept",
    "spoke", "spent", "spread", "sprang", "stood", "stole", "struck", "swore", "swam", "swung",
    "took", "taught", "tore", "told", "thought", "threw", "understood", "woke", "wore", "won",
    "wrote",
];

/// Modal auxiliaries that introduce `modal + be + verb-ing`
pub const MODAL_AUXILIARIES: &[&str] = &[
    "can", "could", "may", "might", "must", "shall", "should", "will", "would",
];

/// Auxiliaries that introduce `aux + not + verb-ing`
pub const NEGATABLE_AUXILIARIES: &[&str] =
    &["am", "is", "are", "was", "were", "will", "has", "have", "had"];

/// Markup-injection patterns rejected by the validator
pub const UNSAFE_MARKUP_PATTERNS: &[&str] = &[
    r"(?is)<script[^>]*>.*?</script>",
    r"(?i)javascript:",
    r"(?i)vbscript:",
    r"(?i)on\w+\s*=",
    r"(?i)<iframe[^>]*>",
    r"(?i)<object[^>]*>",
    r"(?i)<embed[^>]*>",
];
