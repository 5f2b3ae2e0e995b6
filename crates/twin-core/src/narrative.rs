use crate::params::SimulationParameters;
use crate::stage::Stage;

/// Explanation shown next to the diagram for each stage.
pub fn explanation(stage: Stage, params: &SimulationParameters) -> String {
    match stage {
        Stage::Setup => "Alice and Bob start at the same location (Earth) at t=0. Alice plans to \
            travel to a distant star and return. According to Special Relativity, moving clocks \
            tick slower relative to a stationary observer."
            .to_string(),
        Stage::Outbound => "Alice travels away at constant velocity. From Bob's perspective, \
            Alice's clock is running slow (Time Dilation). However, from Alice's perspective, she \
            is stationary and Bob is moving away, so she sees Bob's clock running slow. Look at the \
            green 'Simultaneity' line pointing back to Bob's axis: it shows what Alice considers \
            'Now' on Earth."
            .to_string(),
        Stage::Turnaround => "CRITICAL MOMENT: Alice changes direction (accelerates). She switches \
            from an inertial frame moving away to one moving towards Earth. Her definition of \
            'Now' (the green line) swings drastically forward in time on Earth. This 'gap' in \
            Bob's timeline accounts for the missing years. Acceleration breaks the symmetry."
            .to_string(),
        Stage::Inbound => "Alice returns. Again, due to time dilation, her clock ticks slower than \
            Bob's during this leg. But because of the frame switch at the star, she will return \
            finding Bob much older."
            .to_string(),
        Stage::Conclusion => format!(
            "Reunion! Bob has aged {:.2} years, while Alice has only aged {:.2} years. Both agree \
             on the final result, but they disagree on *when* the aging happened. Bob says it was \
             gradual. Alice says Bob aged rapidly during her turnaround (the gap in simultaneity).",
            params.stationary_total_time(),
            params.traveler_total_proper_time(),
        ),
    }
}
