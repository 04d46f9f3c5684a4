//! Write actions back in their canonical form

use std::borrow::Cow;

use enum_dispatch::enum_dispatch;

use crate::actions::{
    Accept, ActionKind, Bcc, Defer, DeferIfPermit, DeferIfReject, Discard, Dunno, Filter, Hold,
    NumericReply, Prepend, Redirect, Reject, RestrictionList, Warn,
};
use crate::effect::Effect;
use crate::version::Availability;

/// Something that can be written as an `access(5)` action.
///
/// The canonical form is the leading word, a single space and the argument
/// exactly as given (minus surrounding whitespace). Validating a canonical
/// form yields the same action again.
#[enum_dispatch(ActionKind)]
pub trait Canonical {
    /// The leading word: an upper case keyword, a reply code, the digits of
    /// an all-numerical result or the first restriction name
    fn keyword(&self) -> Cow<'_, str>;

    /// Everything after the leading word, `None` if nothing follows
    fn argument(&self) -> Option<Cow<'_, str>>;

    /// Since when Postfix understands this action
    fn availability(&self) -> Availability;

    /// What executing this action does
    fn effects(&self) -> Effect;

    /// Write the canonical form to the buffer
    fn write(&self, buffer: &mut String) {
        buffer.push_str(&self.keyword());
        if let Some(argument) = self.argument() {
            buffer.push(' ');
            buffer.push_str(&argument);
        }
    }

    /// The canonical form as a new string
    fn to_canonical(&self) -> String {
        let mut buffer = String::new();
        self.write(&mut buffer);
        buffer
    }
}
