mod acknowledgment;
mod all;
mod footer;
mod form;
mod log;
mod summary;
mod title;

use self::log::log;
use super::*;
use acknowledgment::acknowledgment;
use footer::footer;
use form::form;
use summary::summary;
use title::title;

pub use all::all as render;
