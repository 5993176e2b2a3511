//! Collaborator services around the mistake engine
//!
//! Image capture, text recognition, and solution generation all sit
//! behind traits. Their outcomes carry success or an error description
//! as plain data; a collaborator failure never fails the engine
//! operation that triggered it.

pub mod capture;
pub mod recognition;
pub mod solution;

pub use capture::{CapturedImage, ImageSource, PathImageSource};
pub use recognition::{RecognizedText, StubRecognizer, TextRecognizer};
pub use solution::{attach_solution, GeneratedSolution, SolutionProvider};
