/// Handoff between the outcome resolver and the view for one round.
///
/// The resolver activates it once both sides have committed and the turn script is
/// queued; the view finishes it when playback of the round is over. Nothing else
/// writes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurnHandshake {
    #[default]
    AwaitingChoices,
    Activated,
}

impl TurnHandshake {
    pub fn activate(&mut self) {
        *self = TurnHandshake::Activated;
    }

    pub fn finish(&mut self) {
        *self = TurnHandshake::AwaitingChoices;
    }

    pub fn is_activated(self) -> bool {
        self == TurnHandshake::Activated
    }
}
