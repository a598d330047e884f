//! Prompt construction for the strategy API.
//!
//! Kept as pure functions so prompt content is testable without network
//! access.

use crate::data::RaceProfile;

/// Build the race strategy and gear recommendation prompt.
pub fn race_strategy_prompt(race: &RaceProfile, user_ftp: u16, user_weight_kg: f32) -> String {
    format!(
        "\
Role: Professional Cycling Coach & Aerodynamics Engineer.
Task: Create a race strategy and gear recommendation.

Rider Profile:
- FTP: {ftp} W
- Weight: {weight} kg

Race Profile:
- Name: {name}
- Type: {race_type}
- Distance: {distance} km
- Elevation Gain: {elevation} m
- Description: {description}

Output Format (Markdown):
1. **Pacing Strategy**: Specific wattage targets for different sections.
2. **Gear Recommendation**: Wheel depth, tire pressure, gearing choice (cassette/chainrings).
3. **Nutrition**: Rough carb intake estimate.
4. **Aero Focus**: Where to prioritize position vs. power.

Keep it concise (under 300 words).",
        ftp = user_ftp,
        weight = user_weight_kg,
        name = race.name,
        race_type = race.race_type,
        distance = race.distance_km,
        elevation = race.elevation_gain_m,
        description = race.description,
    )
}

/// Build the race-specific workout prompt.
pub fn race_workout_prompt(race: &RaceProfile) -> String {
    format!(
        "\
Create a specific cycling interval workout to prepare for: {name} ({race_type}).

Output structure:
- **Workout Name**
- **Total Duration**
- **Warmup**
- **Main Set** (Detailed intervals based on race demands)
- **Cooldown**
- **Why this works** (1 sentence)",
        name = race.name,
        race_type = race.race_type,
    )
}
