mod ai_feedback;
mod class_assignment;
mod progress;
mod role;
mod schedule;
mod subject;
mod subtopic;
mod user;

pub use ai_feedback::{AiFeedback, NewAiFeedback, UpdateAiFeedback};
pub use class_assignment::{ClassAssignment, NewClassAssignment, UpdateClassAssignment};
pub use progress::{NewProgress, Progress, ProgressType, UpdateProgress};
pub use role::{NewRole, NewUserRole, Role, UpdateRole, UserRole};
pub use schedule::{NewSchedule, Schedule, UpdateSchedule, Weekday};
pub use subject::{NewSubject, Subject, UpdateSubject};
pub use subtopic::{NewSubtopic, Subtopic, UpdateSubtopic};
pub use user::{NewUser, UpdateUser, User};
