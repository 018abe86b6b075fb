use recensor::{Censor, Dictionary};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let dictionary = Dictionary::new()
        .with("Wordpress", "WordPress")
        .with("blog%", "blogs")
        .with("May 27, 2003", "June 25, 2006");

    // Matching ignores case but requires whole words.
    show_replace(&dictionary, "wordpress started on May 27, 2003.");

    // Wildcards stop at whitespace and tags.
    show_replace(&dictionary, "<p>blogging about <b>blogs</b></p>");

    // Custom wildcard character.
    let (censored, count) = Censor::new()
        .with_wildcard_character('*')
        .replace_and_count(&Dictionary::new().with("mail*", "email"), "mailing list, MAILBOX")
        .unwrap();
    println!("{} replacements -> {}", count, censored);
}

fn show_replace(dictionary: &Dictionary, text: &str) {
    match Censor::new().replace(dictionary, text) {
        Ok(censored) => println!("{} -> {}", text, censored),
        Err(e) => eprintln!("{}: {}", text, e),
    }
}
