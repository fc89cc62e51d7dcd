use handoff::{demo, Passage, Sink};
use std::process;
use std::time::Duration;

/// Pause between characters, long enough for uncoordinated writers to
/// interleave visibly.
const TEXT_DELAY: Duration = Duration::from_millis(3);

fn main() {
    let first = load_or_die("Ozymandias by Percy Bysshe Shelley:", "texts/ozymandias.txt");
    let second = load_or_die("Hamlet Act III Scene I:", "texts/hamlet.txt");

    let sink = Sink::stdout();
    demo::single_threaded(&sink, &first, &second);
    demo::unsynchronized(&sink, &first, &second, TEXT_DELAY);
    demo::handoff(&sink, &first, &second, TEXT_DELAY);

    process::exit(0);
}

fn load_or_die(title: &str, path: &str) -> Passage {
    Passage::load(title, path).unwrap_or_else(|err| {
        eprintln!("fatal: could not read {}: {}", path, err);
        process::exit(1);
    })
}
