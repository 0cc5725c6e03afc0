mod comment;
mod comment_form;
mod comment_list;
mod controls;
mod login;
mod notice;

pub use self::{comment::*, comment_form::*, comment_list::*, controls::*, login::*, notice::*};
