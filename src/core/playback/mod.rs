//=========================================================================
// Playback
//=========================================================================
//
// Intro video playback and the transition that follows it.
//
// Components:
// - `player`: playback clocks and finished notifications
// - `library`: media file resolution
// - `transition`: end-of-playback scene validation
// - `intro`: behaviour wiring the three together
//
//=========================================================================

//=== Module Declarations =================================================

mod intro;
mod library;
mod player;
mod transition;

//=== Public API ==========================================================

pub use intro::IntroVideoController;
pub use library::MediaLibrary;
pub use player::{MediaPlayer, MediaPlayers, PlaybackFinished};
pub use transition::{EndOfPlaybackTransition, TransitionState};
