use crate::category::Category;
use crate::lexicon::Lexicon;
use crate::registry::Registry;
use crate::test_utils::WORDNET_HEADER;
use crate::vocabulary::Vocabulary;
use crate::VocabularyBuilder;

fn compile(adv: &str, noun: &str, verb: &str, adj: &str) -> Vocabulary {
    let registry = Registry::builtin().unwrap();
    let lexicons = [
        (adv, Category::Adv),
        (noun, Category::Noun),
        (verb, Category::Verb),
        (adj, Category::Adj),
    ]
    .map(|(data, category)| {
        let data = format!("{WORDNET_HEADER}{data}");
        Lexicon::from_reader(data.as_bytes(), category).unwrap()
    });
    VocabularyBuilder::build(lexicons, &registry).unwrap()
}

fn sample() -> Vocabulary {
    compile(
        "about r 1 1 \\ 1 0 00004413\nquickly r 1 1 \\ 1 0 00085811\nover r 5 1 \\ 5 1 00057388\n",
        "dog n 7 5 @ ~ #m #p %p 7 1 02086723\nabove n 1 1 @ 1 0 08688081\n",
        "break v 59 4 ! @ ~ * 59 18 00334186\nround v 5 3 @ ~ + 5 0 00142191\n",
        "much a 1 2 ! & 1 0 01555133\nenough a 1 1 & 1 0 02336109\nred a 3 1 & 3 1 00381097\n",
    )
}

#[test]
fn test_adv_prep_disjoint() {
    let vocab = sample();
    assert!(vocab.overlap(Category::Adv, Category::Prep).is_empty());
    // removed from ADV whether it came from WordNet or from an augmentation
    assert!(!vocab.contains(Category::Adv, "about"));
    assert!(!vocab.contains(Category::Adv, "over"));
    assert!(!vocab.contains(Category::Adv, "by"));
    assert!(vocab.contains(Category::Adv, "quickly"));
    // words no preposition claims keep their augmented ADV reading
    assert!(vocab.contains(Category::Adv, "each"));
    assert!(vocab.contains(Category::Adv, "yet"));
}

#[test]
fn test_adj_det_disjoint() {
    let vocab = sample();
    assert!(vocab.overlap(Category::Adj, Category::Det).is_empty());
    assert!(!vocab.contains(Category::Adj, "much"));
    assert!(!vocab.contains(Category::Adj, "enough"));
    assert!(vocab.contains(Category::Det, "much"));
    assert!(vocab.contains(Category::Adj, "red"));
}

#[test]
fn test_reverse_direction_untouched() {
    let vocab = sample();
    assert!(vocab.contains(Category::Prep, "about"));
    assert!(vocab.contains(Category::Prep, "over"));
    assert!(vocab.contains(Category::Det, "enough"));
}

#[test]
fn test_participle_ambiguity_preserved() {
    let vocab = sample();
    assert_eq!(
        vec![Category::Verb, Category::Adj],
        vocab.possible_categories("broken")
    );
    assert_eq!(vec![Category::Verb], vocab.possible_categories("broke"));
    assert_eq!(vec![Category::Noun], vocab.possible_categories("children"));
}

#[test]
fn test_cross_category_words() {
    let vocab = sample();
    assert_eq!(
        vec![Category::Noun, Category::Prep],
        vocab.possible_categories("without")
    );
    assert_eq!(
        vec![Category::Adj, Category::Pron],
        vocab.possible_categories("another")
    );
    assert_eq!(
        vec![Category::Noun, Category::Verb, Category::Adj, Category::Prep],
        vocab.possible_categories("round")
    );
    assert_eq!(vec![Category::Prep], vocab.possible_categories("because of"));
    assert_eq!(
        vec![Category::Adv, Category::Pron, Category::Det, Category::Conj],
        vocab.possible_categories("that")
    );
}

#[test]
fn test_every_category_present() {
    let vocab = compile("", "", "", "");
    let mut buf = vec![];
    vocab.write_json(&mut buf, false).unwrap();
    let doc: serde_json::Map<String, serde_json::Value> = serde_json::from_slice(&buf).unwrap();
    let mut keys: Vec<_> = doc.keys().map(String::as_str).collect();
    let mut expected: Vec<_> = Category::ALL.iter().map(|c| c.as_str()).collect();
    keys.sort_unstable();
    expected.sort_unstable();
    assert_eq!(expected, keys);
    for category in Category::CLOSED_CLASS {
        assert!(vocab.len(category) > 0);
    }
    assert!(vocab.contains(Category::Noun, "without"));
}

#[test]
fn test_unknown_word() {
    let vocab = sample();
    assert!(vocab.possible_categories("zzzznotaword").is_empty());
    assert!(vocab.possible_categories("Dog").is_empty());
}
