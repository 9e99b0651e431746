use bug_crossing::compute::create_hearts;
use bug_crossing::entities::*;

#[test]
fn entity_clone_and_eq() {
    assert_eq!(Sprite::Player, Sprite::Player);
    assert_ne!(Sprite::Player, Sprite::Enemy);
    assert_eq!(GameStatus::Playing, GameStatus::Playing);
    assert_ne!(GameStatus::Won, GameStatus::Lost);
    assert_ne!(Direction::Up, Direction::Down);

    let heart = Heart::new(420.0, 0.0);
    assert_eq!(heart.clone(), heart);
}

#[test]
fn constructors_tag_the_sprite() {
    assert_eq!(Heart::new(0.0, 0.0).entity.sprite, Sprite::Heart);
    assert_eq!(Enemy::new(0.0, 60.0, 40.0).entity.sprite, Sprite::Enemy);
    assert_eq!(Player::new(Vec::new()).entity.sprite, Sprite::Player);
}

#[test]
fn new_player_starts_playing_at_start() {
    let p = Player::new(create_hearts(3));
    assert_eq!((p.entity.x, p.entity.y), (START_X, START_Y));
    assert!(p.is_playing());
    assert!(!p.has_won());
    assert!(!p.has_lost());
    assert!(!p.has_collided);
}

#[test]
fn terminal_flags_are_mutually_exclusive() {
    let mut p = Player::new(Vec::new());
    p.status = GameStatus::Won;
    assert!(p.has_won() && !p.has_lost() && !p.is_playing());
    p.status = GameStatus::Lost;
    assert!(p.has_lost() && !p.has_won() && !p.is_playing());
}

#[test]
fn player_clone_is_independent() {
    let original = Player::new(create_hearts(3));
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.entity.x = 0.0;
    cloned.lives.remove(0);
    cloned.has_collided = true;

    assert_eq!(original.entity.x, START_X);
    assert_eq!(original.lives.len(), 3);
    assert!(!original.has_collided);
}
