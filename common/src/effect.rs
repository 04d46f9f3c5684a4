//! Flags summarising what an action does

bitflags::bitflags! {
    /// What executing an action does to the mail transaction.
    ///
    /// The flags summarise the `access(5)` description of every action, so
    /// callers can e.g. warn before saving an entry that affects all
    /// recipients of a message.
    #[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
    pub struct Effect: u16 {
        /// The matching address etc. is accepted
        const ACCEPT = 0x0001;
        /// Rejected, do not try again
        const REJECT = 0x0002;
        /// Rejected, try again later
        const TEMPFAIL = 0x0004;
        /// The SMTP server hangs up after replying
        const DISCONNECT = 0x0008;
        /// Only takes effect depending on a later restriction
        const CONDITIONAL = 0x0010;
        /// Evaluation is handed to other named restrictions
        const DELEGATES = 0x0020;
        /// A copy is sent to an additional recipient
        const ADDS_RECIPIENT = 0x0040;
        /// The message is sent somewhere else than intended
        const REROUTES = 0x0080;
        /// The message is kept on the hold queue
        const HOLDS = 0x0100;
        /// Delivery is claimed while the message is dropped
        const DISCARDS = 0x0200;
        /// A header is added to the message
        const MODIFIES_HEADERS = 0x0400;
        /// The optional text ends up in the mail log
        const LOGS = 0x0800;
        /// Currently applies to every recipient of the message
        const ALL_RECIPIENTS = 0x1000;
        /// Only executes after the message is queued
        const AFTER_QUEUE = 0x2000;
    }
}

impl Default for Effect {
    /// No effect, e.g. `DUNNO`
    fn default() -> Self {
        Effect::empty()
    }
}

impl Effect {
    /// Whether this ends the evaluation with a negative reply
    #[must_use]
    pub fn refuses(self) -> bool {
        self.intersects(Effect::REJECT | Effect::TEMPFAIL)
    }
}
