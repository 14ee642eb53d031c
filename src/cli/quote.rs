//! Random RuPaul quote printed at startup.

use rand::seq::SliceRandom;

use crate::cli::output;

pub const QUOTES: &[&str] = &[
    "Now Sashay Away!",
    "And If I fly or if I fall, at least I can say I gave it all!",
    "When you become the image of your own imagination, it's the most powerful thing you could ever do.",
    "We're born naked, and the rest is drag.",
    "I dance to the beat of a different drummer.",
    "All sins are forgiven once you start making a lot of money.",
    "With hair, heels, and attitude, honey, I am through the roof!",
    "When the going gets tough, the tough reinvent.",
    "We are all doing drag. Every single person on this planet is doing it.",
    "The amount of respect you have for others is in direct proportion to how much respect you have for yourself.",
    "It's as if our culture is addicted to fear and the flat screen is our drug dealer.",
    "Through my observations, it became clear that most of society's rules and customs are rooted in fear and superstition!",
    "Life is about using the whole box of crayons.",
    "Reading is fundamental.",
    "Drag queens have always taken on that role of spilling the tea - and the tea is the emperor has no clothes!",
    "In our subconscious, we all know we're playing roles.",
    "Life is not to be taken seriously.",
    "It's very easy to look at the world and think this is all so cruel and so mean. It's important to not become bitter from it.",
    "To understand humans, you must study them as a species of animal.",
    "There are only two types of people in the world. There are the people who understand that this is a matrix, and then there are the people who buy it lock, stock and barrel.",
    "The gift you can give to other people is allowing them to give you something.",
    "Live your life in the now, because you get to a certain age and you realize, \"Wow, that was fast.\"",
    "There's not enough dancing in the world. And the fact that there are no daytime discos right now is indicative of the trouble we're in as a society.",
    "You have to find a tribe.",
];

/// Pick a random quote.
pub fn random() -> &'static str {
    QUOTES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or("Now Sashay Away!")
}

/// Print a random quote.
pub fn print() {
    output::info(format!(
        "👸 Random RuPaul quote: \"{}\"",
        output::quote(random())
    ));
}
