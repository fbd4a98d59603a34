//! Iterator: sequential access to a collection without exposing how it is
//! stored. The repository hands out a cursor that plugs into
//! [`std::iter::Iterator`], so `for` loops and adapters work on it directly.

use crate::domain::model::{Category, Transcript};
use crate::domain::ports::Demo;
use crate::utils::error::Result;

pub trait Container {
    type Iter<'a>: Iterator
    where
        Self: 'a;

    fn iterator(&self) -> Self::Iter<'_>;
}

pub struct NameRepository {
    names: Vec<String>,
}

impl NameRepository {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for NameRepository {
    fn default() -> Self {
        Self::new(["Robert", "John", "Julie", "Lora"])
    }
}

pub struct NameIterator<'a> {
    names: &'a [String],
    index: usize,
}

impl<'a> Iterator for NameIterator<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.names.get(self.index)?;
        self.index += 1;
        Some(name.as_str())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.names.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for NameIterator<'_> {}

impl Container for NameRepository {
    type Iter<'a> = NameIterator<'a>
    where
        Self: 'a;

    fn iterator(&self) -> Self::Iter<'_> {
        NameIterator {
            names: &self.names,
            index: 0,
        }
    }
}

impl<'a> IntoIterator for &'a NameRepository {
    type Item = &'a str;
    type IntoIter = NameIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        NameIterator {
            names: &self.names,
            index: 0,
        }
    }
}

pub struct IteratorDemo;

impl Demo for IteratorDemo {
    fn name(&self) -> &'static str {
        "iterator"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn summary(&self) -> &'static str {
        "Walk a name repository through its own iterator"
    }

    fn run(&self, out: &mut Transcript) -> Result<()> {
        let repository = NameRepository::default();

        for name in repository.iterator() {
            out.say(format!("Name : {}", name));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iterates_in_order() {
        let repository = NameRepository::default();
        let names: Vec<&str> = repository.into_iter().collect();
        assert_eq!(names, vec!["Robert", "John", "Julie", "Lora"]);
    }

    #[test]
    fn test_exhausted_iterator_stays_empty() {
        let repository = NameRepository::new(["only"]);
        let mut iter = (&repository).into_iter();
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.next(), Some("only"));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_demo_output() {
        let mut out = Transcript::new();
        IteratorDemo.run(&mut out).unwrap();
        assert_eq!(
            out.lines(),
            &["Name : Robert", "Name : John", "Name : Julie", "Name : Lora"]
        );
    }
}
