//! Mediator: users never talk to each other directly, the chat room relays
//! and formats every message.

use crate::domain::model::{Category, Transcript};
use crate::domain::ports::Demo;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};

type Clock = Box<dyn Fn() -> DateTime<Utc> + Send + Sync>;

pub struct ChatRoom {
    clock: Clock,
}

impl ChatRoom {
    pub fn new() -> Self {
        Self::with_clock(Utc::now)
    }

    pub fn with_clock(clock: impl Fn() -> DateTime<Utc> + Send + Sync + 'static) -> Self {
        Self {
            clock: Box::new(clock),
        }
    }

    pub fn show_message(&self, user: &User, message: &str, out: &mut Transcript) {
        let now = (self.clock)();
        out.say(format!(
            "{} [{}] : {}",
            now.format("%a %b %d %H:%M:%S UTC %Y"),
            user.name(),
            message
        ));
    }
}

impl Default for ChatRoom {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct User {
    name: String,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn send_message(&self, room: &ChatRoom, message: &str, out: &mut Transcript) {
        room.show_message(self, message, out);
    }
}

pub struct MediatorDemo;

impl Demo for MediatorDemo {
    fn name(&self) -> &'static str {
        "mediator"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn summary(&self) -> &'static str {
        "Users exchange messages through a chat room"
    }

    fn run(&self, out: &mut Transcript) -> Result<()> {
        let room = ChatRoom::new();
        let robert = User::new("Robert");
        let john = User::new("John");

        robert.send_message(&room, "Hi! John!", out);
        john.send_message(&room, "Hello! Robert!", out);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_room() -> ChatRoom {
        ChatRoom::with_clock(|| Utc.with_ymd_and_hms(2024, 3, 5, 9, 30, 0).unwrap())
    }

    #[test]
    fn test_message_format() {
        let mut out = Transcript::new();
        User::new("Robert").send_message(&fixed_room(), "Hi! John!", &mut out);
        assert_eq!(
            out.lines(),
            &["Tue Mar 05 09:30:00 UTC 2024 [Robert] : Hi! John!"]
        );
    }

    #[test]
    fn test_renamed_user_shows_new_name() {
        let mut user = User::new("Robert");
        user.set_name("Bob");

        let mut out = Transcript::new();
        user.send_message(&fixed_room(), "hey", &mut out);
        assert!(out.lines()[0].ends_with("[Bob] : hey"));
    }

    #[test]
    fn test_demo_output() {
        let mut out = Transcript::new();
        MediatorDemo.run(&mut out).unwrap();
        assert_eq!(out.len(), 2);
        assert!(out.lines()[0].ends_with("[Robert] : Hi! John!"));
        assert!(out.lines()[1].ends_with("[John] : Hello! Robert!"));
    }
}
