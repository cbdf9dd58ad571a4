mod typewriter;

pub use typewriter::TypewriterText;
