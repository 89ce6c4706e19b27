//! Projects the gallery starts with.

use super::{Website, WebsiteDraft};

fn tags(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| t.to_string()).collect()
}

/// The fixed starting collection, in display order.
pub fn seed_websites() -> Vec<Website> {
    let drafts = [
        WebsiteDraft::new(
            "Project Oblivion".to_string(),
            "A dark fantasy action RPG with a deep combat system. Developed using Unreal Engine 5, focusing on high-fidelity graphics and immersive gameplay.".to_string(),
            "https://picsum.photos/seed/oblivion/600/400".to_string(),
            "#".to_string(),
            tags(&["RPG", "Unreal Engine", "Action"]),
        ),
        WebsiteDraft::new(
            "Pixel Jumper".to_string(),
            "A retro-style 2D platformer with challenging levels and pixel-perfect controls. Built with Unity and C#, available on PC and mobile.".to_string(),
            "https://picsum.photos/seed/jumper/600/400".to_string(),
            "#".to_string(),
            tags(&["Platformer", "Unity", "Mobile"]),
        ),
        WebsiteDraft::new(
            "Cosmic Command".to_string(),
            "A real-time strategy game set in space. Manage resources, build fleets, and conquer the galaxy. Made with the Godot engine.".to_string(),
            "https://picsum.photos/seed/cosmic/600/400".to_string(),
            "#".to_string(),
            tags(&["Strategy", "Godot", "PC"]),
        ),
        WebsiteDraft::new(
            "Color Cube".to_string(),
            "A minimalist 3D puzzle game where players manipulate cubes to match patterns. A relaxing experience built with Three.js and WebGL.".to_string(),
            "https://picsum.photos/seed/cube/600/400".to_string(),
            "#".to_string(),
            tags(&["Puzzle", "WebGL", "Web"]),
        ),
        WebsiteDraft::new(
            "Rogue Runner".to_string(),
            "An endless runner for mobile devices with procedurally generated levels and roguelike elements. High replayability and fast-paced action.".to_string(),
            "https://picsum.photos/seed/rogue/600/400".to_string(),
            "#".to_string(),
            tags(&["Mobile", "Action", "Roguelike"]),
        ),
        WebsiteDraft::new(
            "VR Playground".to_string(),
            "An interactive virtual reality sandbox experience. Experiment with physics-based objects and mini-games. Developed for Oculus Quest using Unity.".to_string(),
            "https://picsum.photos/seed/vr/600/400".to_string(),
            "#".to_string(),
            tags(&["VR", "Unity", "Simulation"]),
        ),
    ];

    drafts
        .into_iter()
        .zip(1..)
        .map(|(draft, id)| Website::from_draft(id, draft))
        .collect()
}
