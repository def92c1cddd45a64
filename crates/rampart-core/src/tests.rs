#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::effects::Effect;
    use crate::enums::*;
    use crate::error::PlacementError;
    use crate::events::{Alert, AudioEvent};
    use crate::specs::{enemy_spec, tower_spec, SpecialAbility};
    use crate::state::{GameStateSnapshot, GameSummary};
    use crate::types::{Position, SimTime};

    /// Commands use an internally tagged representation the host can build by hand.
    #[test]
    fn test_player_command_wire_shape() {
        let cmd = PlayerCommand::PlaceTower {
            kind: Some(TowerKind::Bomber),
            position: Position::new(60.0, 100.0),
        };
        let json = serde_json::to_value(&cmd).unwrap();
        assert_eq!(json["type"], "PlaceTower");
        assert_eq!(json["kind"], "Bomber");
        assert_eq!(json["position"]["x"], 60.0);

        let parsed: PlayerCommand =
            serde_json::from_str(r#"{"type":"SelectTowerKind","kind":"Sniper"}"#).unwrap();
        assert!(matches!(
            parsed,
            PlayerCommand::SelectTowerKind {
                kind: TowerKind::Sniper
            }
        ));
    }

    #[test]
    fn test_audio_event_serde() {
        let events = vec![
            AudioEvent::ShotFired {
                kind: TowerKind::Rapid,
            },
            AudioEvent::EnemyDefeated {
                kind: EnemyKind::Boss,
                reward: 130,
            },
            AudioEvent::GameOver {
                summary: GameSummary {
                    wave_reached: 12,
                    enemies_defeated: 140,
                    towers_built: 9,
                    money_earned: 2200,
                    ticks_survived: 90_000,
                },
            },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: AudioEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }
    }

    #[test]
    fn test_effect_tagged() {
        let ring = Effect::ExplosionRing {
            position: Position::new(1.0, 2.0),
            radius: 0.0,
            target_radius: 60.0,
            alpha: 1.0,
            life: 20,
            max_life: 20,
        };
        let json = serde_json::to_value(&ring).unwrap();
        assert_eq!(json["type"], "ExplosionRing");
        assert_eq!(ring.life(), 20);
    }

    #[test]
    fn test_placement_error_messages() {
        let err = PlacementError::InsufficientFunds {
            cost: 250,
            available: 120,
        };
        assert_eq!(err.to_string(), "need $250, have $120");

        let err = PlacementError::Locked {
            kind: TowerKind::Bomber,
            unlock_wave: 7,
        };
        assert_eq!(err.to_string(), "Bomber unlocks at wave 7");
    }

    #[test]
    fn test_alert_serde() {
        let alert = Alert {
            level: AlertLevel::Warning,
            message: "Wave 3 in 3...".to_string(),
            tick: 480,
        };
        let json = serde_json::to_string(&alert).unwrap();
        let back: Alert = serde_json::from_str(&json).unwrap();
        assert_eq!(alert, back);
    }

    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.phase, GamePhase::MainMenu);
        assert!(back.summary.is_none());
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    /// Exactly one critical kind and one splash kind exist; unlocks are ordered by cost.
    #[test]
    fn test_tower_spec_table() {
        let critical: Vec<_> = TowerKind::ALL
            .iter()
            .filter(|k| matches!(tower_spec(**k).special, Some(SpecialAbility::Critical { .. })))
            .collect();
        let splash: Vec<_> = TowerKind::ALL
            .iter()
            .filter(|k| matches!(tower_spec(**k).special, Some(SpecialAbility::Explosion { .. })))
            .collect();
        assert_eq!(critical, vec![&TowerKind::Sniper]);
        assert_eq!(splash, vec![&TowerKind::Bomber]);

        assert_eq!(tower_spec(TowerKind::Basic).unlock_wave, 1);
        for pair in TowerKind::ALL.windows(2) {
            assert!(tower_spec(pair[0]).cost <= tower_spec(pair[1]).cost);
            assert!(tower_spec(pair[0]).unlock_wave <= tower_spec(pair[1]).unlock_wave);
        }
        assert!((tower_spec(TowerKind::Rapid).cooldown_ms() - 250.0).abs() < 1e-10);
    }

    #[test]
    fn test_enemy_spec_table() {
        assert!(enemy_spec(EnemyKind::Fast).speed > enemy_spec(EnemyKind::Basic).speed);
        assert!(enemy_spec(EnemyKind::Boss).health > enemy_spec(EnemyKind::Strong).health);
        assert_eq!(enemy_spec(EnemyKind::Basic).kind, EnemyKind::Basic);
    }

    #[test]
    fn test_position_geometry() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);

        let mid = a.lerp(&b, 0.5);
        assert!((mid.x - 1.5).abs() < 1e-10);
        assert!((mid.y - 2.0).abs() < 1e-10);

        let east = Position::new(10.0, 0.0);
        assert!(a.angle_to(&east).abs() < 1e-10);
        let south = Position::new(0.0, 10.0);
        assert!((a.angle_to(&south) - std::f64::consts::FRAC_PI_2).abs() < 1e-10);
    }

    #[test]
    fn test_step_toward_does_not_overshoot() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(10.0, 0.0);

        let stepped = a.step_toward(&b, 4.0);
        assert!((stepped.x - 4.0).abs() < 1e-10);
        assert!(stepped.y.abs() < 1e-10);

        let landed = a.step_toward(&b, 25.0);
        assert_eq!(landed, b);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..60 {
            time.advance();
        }
        assert_eq!(time.tick, 60);
        // 60 ticks at 60Hz = 1000 ms
        assert!((time.elapsed_ms - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_sim_time_does_not_drift() {
        let mut time = SimTime::default();
        for _ in 0..3600 {
            time.advance();
        }
        assert_eq!(time.tick, 3600);
        assert_eq!(time.elapsed_ms, 60_000.0);

        // Every whole second lands exactly on its nominal value.
        let mut time = SimTime::default();
        for second in 1..=120u32 {
            for _ in 0..crate::constants::TICK_RATE {
                time.advance();
            }
            assert_eq!(time.elapsed_ms, second as f64 * 1000.0);
        }
    }
}
