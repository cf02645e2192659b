//! Example: Compose effect pipelines against a recording runtime
//!
//! Usage: cargo run --example compose_look
//!
//! This example stages single effects and composite looks, prints the
//! pipeline inspection output, and shows the capability calls a runtime
//! adapter receives. It finishes with a channel-backed adapter that hands
//! commits to a worker thread, the fire-and-forget shape a real runtime
//! integration takes.

use crossbeam_channel::{unbounded, Sender};

use stream_effects::effects::{
    looks, AdapterCall, AdapterError, BlurParams, EffectDescriptor, EffectParams,
    PipelineComposer, RecordingAdapter, RuntimeAdapter,
};

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut composer = PipelineComposer::new(RecordingAdapter::new());

    // Run a single effect with default parameters
    composer
        .run(EffectDescriptor::from_id("sepia").expect("sepia is in the catalog"))
        .expect("recording adapter never fails");

    // Replace it with a blur carrying a partial parameter record
    composer
        .run(EffectDescriptor::new(EffectParams::Blur(BlurParams {
            window_size: 21,
            ..Default::default()
        })))
        .expect("recording adapter never fails");

    println!("=== After two single-effect runs (replace mode) ===");
    match composer.inspect() {
        Ok(chain) => println!("{}", chain),
        Err(notice) => println!("{}", notice),
    }

    // Build the purty look; its seven steps chain regardless of mode
    looks::purty(&mut composer).expect("recording adapter never fails");

    println!("\n=== After the purty look ===");
    match composer.inspect() {
        Ok(chain) => println!("{}", chain),
        Err(notice) => println!("{}", notice),
    }

    println!("\n=== Capability calls the runtime received ===");
    for call in composer.adapter().calls() {
        match call {
            AdapterCall::CreateHandle => println!("create_pipeline_handle"),
            AdapterCall::Initialize(list) => println!("initialize ({} effects)", list.len()),
            AdapterCall::Start(list) => println!("start ({} effects)", list.len()),
            AdapterCall::Clear => println!("clear"),
        }
    }

    // A queuing adapter: commits are handed to a worker thread and the
    // composer returns without waiting. Superseded commits are simply
    // overwritten on the runtime side; the last write wins.
    let (tx, rx) = unbounded::<AdapterCall>();
    let worker = std::thread::spawn(move || {
        let mut applied = 0usize;
        for call in rx.iter() {
            if let AdapterCall::Start(list) = call {
                applied = list.len();
            }
        }
        applied
    });

    let mut queued = PipelineComposer::new(QueuingAdapter { tx });
    looks::roto(&mut queued).expect("queue send cannot fail while the worker lives");
    looks::background_replacement(&mut queued)
        .expect("queue send cannot fail while the worker lives");
    drop(queued);

    let applied = worker.join().expect("worker thread panicked");
    println!("\nQueued runtime last applied {} effects", applied);
}

/// Adapter that enqueues every capability call for a worker thread
struct QueuingAdapter {
    tx: Sender<AdapterCall>,
}

impl RuntimeAdapter for QueuingAdapter {
    type Handle = ();

    fn create_pipeline_handle(&mut self) -> Result<Self::Handle, AdapterError> {
        self.send(AdapterCall::CreateHandle)
    }

    fn initialize(
        &mut self,
        _handle: &Self::Handle,
        descriptors: &[EffectDescriptor],
    ) -> Result<(), AdapterError> {
        self.send(AdapterCall::Initialize(descriptors.to_vec()))
    }

    fn start(
        &mut self,
        _handle: &Self::Handle,
        descriptors: &[EffectDescriptor],
    ) -> Result<(), AdapterError> {
        self.send(AdapterCall::Start(descriptors.to_vec()))
    }

    fn clear(&mut self, _handle: &Self::Handle) -> Result<(), AdapterError> {
        self.send(AdapterCall::Clear)
    }
}

impl QueuingAdapter {
    fn send(&self, call: AdapterCall) -> Result<(), AdapterError> {
        self.tx
            .send(call)
            .map_err(|e| AdapterError::new(format!("runtime queue closed: {}", e)))
    }
}
