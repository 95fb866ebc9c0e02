//! Drive a count-up through simulated 60 Hz frames and print what a UI would
//! render, including a mid-flight retarget.

use countup_sampler::{CountUpProps, Sampler, SamplerEvent};

fn main() {
    let props = CountUpProps::new(0.0, 2500.0, 400.0)
        .started(true)
        .with_easing("easeOutCubic")
        .with_formatter(|v| format!("{:>6.0} visitors", v));
    let mut sampler = Sampler::new(props.clone());

    let mut frame = 0u32;
    while sampler.is_active() {
        frame += 1;
        let out = sampler.update(17.0);
        for ev in &out.events {
            match ev {
                SamplerEvent::SessionCompleted { value, .. } => println!("completed at {value}"),
                other => println!("event: {:?}", other),
            }
        }
        if !out.samples.is_empty() {
            println!("frame {:>3}: {}", frame, sampler.display());
        }

        // Raise the target part way through; the running session is replaced.
        if frame == 10 {
            sampler.set_props(CountUpProps {
                start: sampler.value(),
                end: 4000.0,
                ..props.clone()
            });
        }
    }

    println!("final: {}", sampler.display());
}
