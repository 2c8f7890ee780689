//! Popup announcements with generation-stamped dismissal.
//!
//! Every announcement and every clear bumps the generation. A delayed
//! dismissal carries the generation it was scheduled for and is dropped if
//! anything happened since, so a stale timer never hides a newer popup.

use tracing::{debug, instrument};

/// What the popup is announcing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnouncementKind {
    /// A player completed a line. Shown with confetti, dismissed by timer.
    Victory,
    /// The board filled up with no line. Stays until the position changes.
    Draw,
}

/// A popup currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    kind: AnnouncementKind,
    message: String,
    generation: u64,
}

impl Announcement {
    /// Kind of announcement.
    pub fn kind(&self) -> AnnouncementKind {
        self.kind
    }

    /// Text to show.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Generation this announcement was raised under.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Owns the current popup and the generation counter.
#[derive(Debug, Default)]
pub struct Announcer {
    generation: u64,
    current: Option<Announcement>,
}

impl Announcer {
    /// Creates an announcer with nothing on screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the popup and returns its generation.
    #[instrument(skip(self, message))]
    pub fn announce(&mut self, kind: AnnouncementKind, message: impl Into<String>) -> u64 {
        self.generation += 1;
        self.current = Some(Announcement {
            kind,
            message: message.into(),
            generation: self.generation,
        });
        self.generation
    }

    /// Hides the popup if it is still the one raised under `generation`.
    ///
    /// Returns false for stale dismissals.
    #[instrument(skip(self), fields(current = self.generation))]
    pub fn dismiss(&mut self, generation: u64) -> bool {
        match &self.current {
            Some(announcement) if announcement.generation == generation => {
                self.current = None;
                true
            }
            _ => {
                debug!("Ignoring stale dismissal");
                false
            }
        }
    }

    /// Replaces the text of the popup on screen, keeping its generation so a
    /// pending dismissal still applies.
    pub fn rewrite(&mut self, message: impl Into<String>) {
        if let Some(announcement) = &mut self.current {
            announcement.message = message.into();
        }
    }

    /// Hides any popup and invalidates every pending dismissal.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.current = None;
    }

    /// The popup on screen, if any.
    pub fn current(&self) -> Option<&Announcement> {
        self.current.as_ref()
    }

    /// Returns true while a victory popup is up.
    pub fn is_celebrating(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|a| a.kind == AnnouncementKind::Victory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dismiss_current_generation() {
        let mut announcer = Announcer::new();
        let generation = announcer.announce(AnnouncementKind::Victory, "Congratulations Ada!");
        assert!(announcer.is_celebrating());

        assert!(announcer.dismiss(generation));
        assert!(announcer.current().is_none());
    }

    #[test]
    fn test_clear_invalidates_pending_dismissal() {
        let mut announcer = Announcer::new();
        let stale = announcer.announce(AnnouncementKind::Victory, "Congratulations Ada!");
        announcer.clear();
        let fresh = announcer.announce(AnnouncementKind::Victory, "Congratulations Grace!");

        assert!(!announcer.dismiss(stale));
        assert_eq!(announcer.current().map(|a| a.message()), Some("Congratulations Grace!"));
        assert!(announcer.dismiss(fresh));
    }

    #[test]
    fn test_new_announcement_supersedes_old_timer() {
        let mut announcer = Announcer::new();
        let first = announcer.announce(AnnouncementKind::Victory, "Congratulations Ada!");
        announcer.announce(AnnouncementKind::Draw, "No Winners!");

        assert!(!announcer.dismiss(first));
        assert_eq!(announcer.current().map(|a| a.kind()), Some(AnnouncementKind::Draw));
        assert!(!announcer.is_celebrating());
    }

    #[test]
    fn test_rewrite_keeps_generation() {
        let mut announcer = Announcer::new();
        let generation = announcer.announce(AnnouncementKind::Victory, "Congratulations Player X!");
        announcer.rewrite("Congratulations Ada!");

        assert_eq!(announcer.current().map(|a| a.message()), Some("Congratulations Ada!"));
        assert!(announcer.dismiss(generation));

        announcer.rewrite("Congratulations Grace!");
        assert!(announcer.current().is_none());
    }

    #[test]
    fn test_generations_increase() {
        let mut announcer = Announcer::new();
        let a = announcer.announce(AnnouncementKind::Draw, "No Winners!");
        announcer.clear();
        let b = announcer.announce(AnnouncementKind::Draw, "No Winners!");
        assert!(b > a);
        assert_eq!(announcer.current().map(|a| a.generation()), Some(b));
    }
}
