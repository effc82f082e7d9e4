mod booking;
mod car;
mod category;
mod notification;
mod user;
