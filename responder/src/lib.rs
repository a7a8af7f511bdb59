mod dispatcher;
mod handler;

pub use dispatcher::{Dispatcher, MAX_MESSAGE_SIZE};
pub use handler::handle_datagram;
