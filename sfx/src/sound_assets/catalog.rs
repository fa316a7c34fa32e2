// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// One sound effect the game expects, identified by the exact file name the app loads
/// from the asset directory, along with a short hint of what the audio should sound
/// like. This is pure data, used only for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoundAsset {
    pub filename: &'static str,
    pub description: &'static str,
}

/// The sound files the game needs. Fixed for the life of the process, never mutated,
/// and presented to the user in exactly this order.
pub const SOUND_ASSETS: [SoundAsset; 3] = [
    SoundAsset {
        filename: "flip.mp3",
        description: "Card flip sound - short click or whoosh",
    },
    SoundAsset {
        filename: "match.mp3",
        description: "Match found sound - positive chime or ding",
    },
    SoundAsset {
        filename: "victory.mp3",
        description: "Game complete sound - celebration or fanfare",
    },
];
