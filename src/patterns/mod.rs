//! The pattern demos, grouped the way the classic catalog groups them.

pub mod behavioral;
pub mod creational;
pub mod structural;
