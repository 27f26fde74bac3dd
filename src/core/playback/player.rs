//=========================================================================
// Media Player
//=========================================================================
//
// Playback clock that fires "finished" notifications.
//
// No decoding happens here. A player tracks a URL, a clip length and a
// playhead; when the playhead reaches the end of the clip every live
// subscriber receives one PlaybackFinished over its channel.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use log::{debug, info};

//=== Internal Dependencies ===============================================

use crate::core::world::EntityId;

//=== PlaybackFinished ====================================================

/// Sent to subscribers when a player reaches the end of its clip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackFinished {
    pub player: EntityId,
    pub url: Option<PathBuf>,
}

//=== MediaPlayer =========================================================

/// Playback source attached to an entity.
#[derive(Debug)]
pub struct MediaPlayer {
    owner: EntityId,
    url: Option<PathBuf>,
    duration: f32,
    position: f32,
    playing: bool,
    looping: bool,
    subscribers: Vec<Sender<PlaybackFinished>>,
}

impl MediaPlayer {
    /// Creates a stopped player for a clip of `duration` seconds.
    pub fn new(owner: EntityId, duration: f32) -> Self {
        Self {
            owner,
            url: None,
            duration: duration.max(0.0),
            position: 0.0,
            playing: false,
            looping: false,
            subscribers: Vec::new(),
        }
    }

    //--- Configuration ----------------------------------------------------

    pub fn set_url(&mut self, url: impl AsRef<Path>) {
        self.url = Some(url.as_ref().to_path_buf());
        self.position = 0.0;
    }

    pub fn url(&self) -> Option<&Path> {
        self.url.as_deref()
    }

    pub fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    //--- Transport --------------------------------------------------------

    pub fn play(&mut self) {
        debug!("Player {:?} playing {:?}", self.owner, self.url);
        self.playing = true;
    }

    /// Stops playback and rewinds to the start.
    pub fn stop(&mut self) {
        self.playing = false;
        self.position = 0.0;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    //--- Notifications ----------------------------------------------------

    /// Subscribes to end-of-playback notifications.
    ///
    /// Dropping the receiver unsubscribes; the sender is pruned the next
    /// time the player fires.
    pub fn subscribe_finished(&mut self) -> Receiver<PlaybackFinished> {
        // Unread notifications coalesce into one
        let (tx, rx) = bounded(1);
        self.subscribers.push(tx);
        rx
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    //--- Clock ------------------------------------------------------------

    /// Advances the playhead by `dt` seconds.
    ///
    /// Returns the number of times the end of the clip was reached.
    pub fn advance(&mut self, dt: f32) -> usize {
        if !self.playing || dt <= 0.0 {
            return 0;
        }

        self.position += dt;
        if self.position < self.duration {
            return 0;
        }

        if !self.looping {
            self.position = self.duration;
            self.playing = false;
            self.notify_finished();
            return 1;
        }

        if self.duration <= 0.0 {
            self.position = 0.0;
            self.notify_finished();
            return 1;
        }

        let mut loops = 0;
        while self.position >= self.duration {
            self.position -= self.duration;
            self.notify_finished();
            loops += 1;
        }
        loops
    }

    fn notify_finished(&mut self) {
        info!("Player {:?} reached end of {:?}", self.owner, self.url);

        let event = PlaybackFinished {
            player: self.owner,
            url: self.url.clone(),
        };
        self.subscribers.retain(|tx| match tx.try_send(event.clone()) {
            Ok(()) | Err(TrySendError::Full(_)) => true,
            Err(TrySendError::Disconnected(_)) => false,
        });
    }
}

//=== MediaPlayers ========================================================

/// Playback sources keyed by the entity they are attached to.
#[derive(Debug, Default)]
pub struct MediaPlayers {
    players: HashMap<EntityId, MediaPlayer>,
}

impl MediaPlayers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a player for a clip of `duration` seconds to `owner`.
    pub fn attach(&mut self, owner: EntityId, duration: f32) -> &mut MediaPlayer {
        self.players
            .entry(owner)
            .or_insert_with(|| MediaPlayer::new(owner, duration))
    }

    pub fn detach(&mut self, owner: EntityId) -> Option<MediaPlayer> {
        self.players.remove(&owner)
    }

    pub fn get(&self, owner: EntityId) -> Option<&MediaPlayer> {
        self.players.get(&owner)
    }

    pub fn get_mut(&mut self, owner: EntityId) -> Option<&mut MediaPlayer> {
        self.players.get_mut(&owner)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (EntityId, &mut MediaPlayer)> {
        self.players.iter_mut().map(|(&owner, player)| (owner, player))
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Advances every player's clock.
    pub fn advance(&mut self, dt: f32) {
        for player in self.players.values_mut() {
            player.advance(dt);
        }
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::world::World;
    use glam::Vec2;

    fn owner() -> EntityId {
        World::new().spawn(Vec2::ZERO)
    }

    #[test]
    fn stopped_player_does_not_advance() {
        let mut player = MediaPlayer::new(owner(), 1.0);
        assert_eq!(player.advance(2.0), 0);
        assert_eq!(player.position(), 0.0);
    }

    #[test]
    fn finishes_once_and_stops() {
        let mut player = MediaPlayer::new(owner(), 1.0);
        player.set_url("media/Intro.mp4");
        let rx = player.subscribe_finished();
        player.play();

        assert_eq!(player.advance(0.6), 0);
        assert!(rx.try_recv().is_err());

        assert_eq!(player.advance(0.6), 1);
        assert!(!player.is_playing());
        let event = rx.try_recv().expect("finished notification");
        assert_eq!(event.url.as_deref(), Some(Path::new("media/Intro.mp4")));

        assert_eq!(player.advance(1.0), 0);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn looping_fires_every_loop() {
        let mut player = MediaPlayer::new(owner(), 1.0);
        player.set_looping(true);
        player.play();

        assert_eq!(player.advance(2.5), 2);
        assert!(player.is_playing());
        assert!((player.position() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn dropped_subscriber_is_pruned() {
        let mut player = MediaPlayer::new(owner(), 0.5);
        let kept = player.subscribe_finished();
        let dropped = player.subscribe_finished();
        drop(dropped);
        assert_eq!(player.subscriber_count(), 2);

        player.play();
        player.advance(1.0);

        assert_eq!(player.subscriber_count(), 1);
        assert!(kept.try_recv().is_ok());
    }

    #[test]
    fn players_are_keyed_by_owner() {
        let mut world = World::new();
        let a = world.spawn(Vec2::ZERO);
        let b = world.spawn(Vec2::ZERO);
        let mut players = MediaPlayers::new();
        players.attach(a, 1.0).play();

        assert!(players.get(a).is_some());
        assert!(players.get(b).is_none());

        players.advance(2.0);
        assert!(!players.get(a).map_or(true, MediaPlayer::is_playing));
        assert!(players.detach(a).is_some());
        assert!(players.is_empty());
    }
}
