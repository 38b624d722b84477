mod action_log;
mod attachment;
mod comment;
mod lookup;
mod notification;
mod requirement;
mod user;
