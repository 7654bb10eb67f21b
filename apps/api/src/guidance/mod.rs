// Static guidance content served alongside the flows: audience quizzes
// and the featured employer directory. Both feed generation flows.

pub mod employers;
pub mod handlers;
pub mod quiz;
