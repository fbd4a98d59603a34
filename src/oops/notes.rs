//! Short prose notes on object-oriented basics, phrased for Rust.

use crate::domain::model::{Category, Transcript};
use crate::domain::ports::Demo;
use crate::utils::error::Result;

#[derive(Debug, Clone, Copy)]
pub struct Note {
    pub title: &'static str,
    pub points: &'static [&'static str],
}

pub const NOTES: &[Note] = &[
    Note {
        title: "Encapsulation",
        points: &[
            "Fields are private to their module unless marked pub.",
            "State changes go through methods, so invariants are checked in one place.",
            "See the cricket scorer: the score only moves through four() and set_score().",
        ],
    },
    Note {
        title: "Abstraction",
        points: &[
            "Expose what a thing does, hide how it does it.",
            "A mobile phone user dials a number without knowing the radio stack.",
            "In Rust the public surface is the trait or the pub methods; the rest stays private.",
        ],
    },
    Note {
        title: "Inheritance vs composition",
        points: &[
            "Rust has no struct inheritance; reuse data by embedding one struct in another.",
            "Reuse behavior with trait default methods.",
            "Prefer composition: it keeps types decoupled and explicit.",
        ],
    },
    Note {
        title: "Polymorphism",
        points: &[
            "One call site, many behaviors: the concrete type decides what runs.",
            "Static dispatch: generics with trait bounds, resolved at compile time.",
            "Dynamic dispatch: trait objects (dyn Trait), resolved through a vtable.",
            "See the interfaces demo: a Vec<Box<dyn Flyable>> holds birds and aeroplanes.",
        ],
    },
    Note {
        title: "Pass by value vs pass by reference",
        points: &[
            "Passing a value moves it; the caller can no longer use it.",
            "Copy types such as integers are copied instead of moved.",
            "Passing &T borrows for reading, &mut T borrows exclusively for writing.",
        ],
    },
    Note {
        title: "Static vs instance",
        points: &[
            "Associated functions take no self and are called on the type: Stock::new(..).",
            "Methods take self, &self or &mut self and are called on a value.",
            "Shared constants live in const or static items, not in per-instance fields.",
        ],
    },
    Note {
        title: "Access modifiers",
        points: &[
            "Items are private to their module by default.",
            "pub makes an item visible everywhere the module is visible.",
            "pub(crate) limits visibility to the current crate, pub(super) to the parent module.",
        ],
    },
    Note {
        title: "Interfaces",
        points: &[
            "A trait is a contract: a set of methods a type promises to provide.",
            "A type may implement any number of traits.",
            "Unrelated types such as a bird and an aeroplane can both be Flyable.",
        ],
    },
    Note {
        title: "Abstract class vs interface",
        points: &[
            "A trait with default methods plays the role of an abstract class.",
            "Traits hold no fields; shared data lives in a struct the implementor embeds.",
            "A type can implement many traits but embeds data explicitly.",
        ],
    },
    Note {
        title: "Multiple inheritance",
        points: &[
            "A type may implement several traits at once.",
            "Supertraits (trait Pet: Animal + Display) require other traits as a base.",
            "Name clashes are resolved with fully qualified syntax: <T as Trait>::method().",
        ],
    },
    Note {
        title: "Overloading vs overriding",
        points: &[
            "There is no method overloading; use distinct names, generics or enums.",
            "Overriding means replacing a trait's default method in an impl.",
        ],
    },
    Note {
        title: "toString",
        points: &[
            "Implement Display to give a type its user-facing text; to_string() comes for free.",
            "Derive Debug for developer-facing output with {:?}.",
        ],
    },
    Note {
        title: "Immutability",
        points: &[
            "Bindings are immutable unless declared mut.",
            "String literals are immutable &str; String is the owned, growable buffer.",
        ],
    },
];

pub fn find_note(title: &str) -> Option<&'static Note> {
    NOTES.iter().find(|n| n.title.eq_ignore_ascii_case(title))
}

pub struct NotesDemo;

impl Demo for NotesDemo {
    fn name(&self) -> &'static str {
        "notes"
    }

    fn category(&self) -> Category {
        Category::Oops
    }

    fn summary(&self) -> &'static str {
        "Prose notes on object-oriented basics"
    }

    fn run(&self, out: &mut Transcript) -> Result<()> {
        for (i, note) in NOTES.iter().enumerate() {
            if i > 0 {
                out.blank();
            }
            out.say(format!("{}. {}", i + 1, note.title));
            for point in note.points {
                out.say(format!("   - {}", point));
            }
        }
        Ok(())
    }
}
