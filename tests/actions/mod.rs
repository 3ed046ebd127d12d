//! Tests for the actions exposed by `Session`.
//!
//! Each test runs against a mockito server standing in for the crawler API and checks the
//! normalized `{status, message, data}` result along with the requests actually sent.

mod account;
mod page;

use crawlview_test_utils::prelude::*;

use crate::util::{session, session_at};
