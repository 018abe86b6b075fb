use recensor::{CensorStr, Dictionary, Replacement, StarReplacer, Strategies};

fn main() {
    // Values naming a registered strategy are resolved, everything else is literal.
    let mut strategies = Strategies::default();
    strategies.insert("shout", |word: &str| word.to_uppercase());
    let dictionary = strategies.resolve_dictionary([
        ("blogging", "star"),
        ("2003", "token"),
        ("quiet", "shout"),
        ("misspelled", "strar"),
    ]);
    println!(
        "{}",
        "quiet blogging since 2003, misspelled"
            .censor_with(&dictionary)
            .unwrap()
    );

    // Or build the dictionary directly.
    let dictionary = Dictionary::new()
        .with("secret%", Replacement::strategy(StarReplacer::new('#')))
        .with("password", Replacement::strategy(|word: &str| format!("<{} chars>", word.len())));
    println!(
        "{}",
        "the Secrets are in the PASSWORD file"
            .censor_with(&dictionary)
            .unwrap()
    );
}
