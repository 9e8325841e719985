//! The lift sequencer: a timed state machine coupled to physical motion.

use crate::config::LiftConfig;
use crate::core::{LiftState, StateHistory, StateTransition, TransitionCause};
use crate::coupling::{Body, Coupling};
use crate::host::Host;
use crate::indicator::{IndicatorColor, StatusIndicator};
use crate::motion::{SliderAxis, TransportAnimator, Vec3, Waypoint};
use crate::sequencer::clock::FixedTimestep;
use crate::sequencer::context::SequencerContext;
use chrono::Utc;
use uuid::Uuid;

/// Drives one lift prop through its life cycle.
///
/// Two entry points are called by the host:
/// - [`frame_tick`](Self::frame_tick) at the variable frame rate: blink, then
///   slider motion and arrival, then the dwell timer.
/// - [`physics_tick`](Self::physics_tick) at the fixed physics rate: transport
///   motion, wheel rotation and the move-finished notification.
///
/// [`advance`](Self::advance) does both for hosts that only have a frame clock.
/// Build one with [`SequencerBuilder`](super::SequencerBuilder).
pub struct Sequencer<H: Host> {
    id: Uuid,
    config: LiftConfig,
    host: H,
    ctx: SequencerContext,
    slider: SliderAxis,
    transport: TransportAnimator,
    indicator: StatusIndicator,
    coupling: Coupling,
    history: StateHistory<LiftState>,
    clock: FixedTimestep,
    sim_time: f64,
}

impl<H: Host> Sequencer<H> {
    /// Assemble a sequencer from an already validated config.
    pub(crate) fn new(config: LiftConfig, host: H, slider_y: f32, prop_position: Vec3) -> Self {
        let slider = SliderAxis::new(config.bottom_position, config.top_position, config.speed)
            .with_position(slider_y);
        let transport = TransportAnimator::new(
            prop_position,
            config.roll_speed,
            config.wheel_diameter,
            config.arrival_tolerance,
            config.forward_axis,
        );

        let mut sequencer = Self {
            id: Uuid::new_v4(),
            ctx: SequencerContext::new(config.state_duration),
            indicator: StatusIndicator::new(config.blink_interval),
            coupling: Coupling::new(),
            history: StateHistory::with_limit(config.history_limit),
            clock: FixedTimestep::new(config.fixed_timestep, config.max_physics_steps),
            sim_time: 0.0,
            slider,
            transport,
            config,
            host,
        };
        sequencer.start();
        sequencer
    }

    fn start(&mut self) {
        tracing::info!(
            sequencer = %self.id,
            bottom = self.config.bottom_position,
            top = self.config.top_position,
            "lift sequencer started"
        );
        self.host.set_slider_height(self.slider.position());
        self.host.set_prop_position(self.transport.position());
        self.on_enter(LiftState::Available);
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> LiftState {
        self.ctx.state
    }

    pub fn context(&self) -> &SequencerContext {
        &self.ctx
    }

    pub fn config(&self) -> &LiftConfig {
        &self.config
    }

    pub fn history(&self) -> &StateHistory<LiftState> {
        &self.history
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn slider_height(&self) -> f32 {
        self.slider.position()
    }

    pub fn prop_position(&self) -> Vec3 {
        self.transport.position()
    }

    /// Cumulative wheel rotation of the move in flight, in degrees.
    pub fn wheel_angle(&self) -> f32 {
        self.transport.wheel_angle()
    }

    pub fn is_attached(&self) -> bool {
        self.coupling.is_attached()
    }

    pub fn coupling(&self) -> &Coupling {
        &self.coupling
    }

    /// Color currently showing on the indicator, read back from the host.
    pub fn indicator_color(&self) -> IndicatorColor {
        self.host.current_color()
    }

    /// Simulation seconds accumulated by frame ticks.
    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    /// Human-readable status line for an on-screen label.
    pub fn status_line(&self) -> String {
        format!("Current State: {}", self.ctx.state)
    }

    /// Run the physics ticks due for this frame, then the frame tick.
    pub fn advance(&mut self, frame_dt: f32) {
        let steps = self.clock.accumulate(frame_dt);
        let step = self.clock.step();
        for _ in 0..steps {
            self.physics_tick(step);
        }
        self.frame_tick(frame_dt);
    }

    /// Variable-rate tick.
    ///
    /// Returns the state entered, if a transition fired. At most one
    /// transition happens per call. Negative or non-finite `dt` counts as zero.
    pub fn frame_tick(&mut self, dt: f32) -> Option<LiftState> {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.sim_time += f64::from(dt);

        self.indicator.tick(&mut self.ctx, dt, &mut self.host);

        if let Some(target) = self.slider_target() {
            let y = self.slider.move_toward(target, dt);
            self.host.set_slider_height(y);
            tracing::trace!(target_y = target, y, "slider moving");
            if self.slider.is_at(target, self.config.slider_tolerance) {
                self.ctx.motion_in_progress = false;
                tracing::debug!(y, "slider arrived");
                return Some(self.advance_state(TransitionCause::SliderArrived));
            }
        }

        if self.ctx.tick_dwell(dt, self.config.state_duration) {
            return Some(self.advance_state(TransitionCause::DwellElapsed));
        }

        None
    }

    /// Fixed-rate tick.
    ///
    /// Steps the transport. When a move finishes this clears the motion flag,
    /// fires and unregisters the one-shot listener (forcing `Placed` after the
    /// inbound move), and re-creates the coupling after arriving on camera if
    /// it is missing. Returns the state entered, if any.
    pub fn physics_tick(&mut self, dt: f32) -> Option<LiftState> {
        let completed = self.transport.step(dt, &mut self.host)?;
        self.ctx.motion_in_progress = false;

        let entered = self.ctx.on_move_complete.take().map(|forced| {
            self.transition_to(forced, TransitionCause::MovementComplete);
            forced
        });

        if completed.waypoint == Waypoint::OnCamera && !self.coupling.is_attached() {
            self.coupling.attach(&mut self.host, Body::Slider, Body::FrontWheel);
        }

        entered
    }

    fn slider_target(&self) -> Option<f32> {
        match self.ctx.state {
            LiftState::Lifting => Some(self.config.top_position),
            LiftState::Lowering => Some(self.config.bottom_position),
            _ => None,
        }
    }

    fn advance_state(&mut self, cause: TransitionCause) -> LiftState {
        let next = self.ctx.state.next();
        self.transition_to(next, cause);
        next
    }

    fn transition_to(&mut self, next: LiftState, cause: TransitionCause) {
        let from = self.ctx.state;
        self.ctx.state = next;
        self.ctx.dwell_remaining = self.config.state_duration;

        self.history.record(StateTransition {
            from,
            to: next,
            cause,
            sim_time: self.sim_time,
            timestamp: Utc::now(),
        });
        tracing::info!(
            sequencer = %self.id,
            from = %from,
            to = %next,
            ?cause,
            "state transition"
        );

        self.on_enter(next);
    }

    /// Entry actions for `state`.
    ///
    /// `Lifting` and `Lowering` raise the motion flag along with the slider
    /// command, so the dwell timer stays frozen for the whole travel and the
    /// next state starts with a full dwell. Those states end on slider
    /// arrival only.
    fn on_enter(&mut self, state: LiftState) {
        match state {
            LiftState::Available => {
                self.show(IndicatorColor::Green, false);
            }
            LiftState::Reserved => {
                self.ctx.on_move_complete = Some(LiftState::Placed);
                self.show(IndicatorColor::Yellow, false);
                self.begin_transport(Waypoint::OnCamera);
            }
            LiftState::Placed => {
                self.coupling.attach(&mut self.host, Body::Slider, Body::FrontWheel);
                self.show(IndicatorColor::Green, false);
            }
            LiftState::Lifting => {
                self.show(IndicatorColor::Yellow, true);
                self.slider.command(self.config.top_position);
                self.ctx.motion_in_progress = true;
            }
            LiftState::Parked => {
                self.show(IndicatorColor::Red, false);
            }
            LiftState::Lowering => {
                self.show(IndicatorColor::Yellow, true);
                self.slider.command(self.config.bottom_position);
                self.ctx.motion_in_progress = true;
            }
            LiftState::Completed => {
                self.coupling.detach(&mut self.host);
                self.begin_transport(Waypoint::OffCamera);
                self.show(IndicatorColor::Green, false);
            }
        }
    }

    fn show(&mut self, color: IndicatorColor, blinking: bool) {
        self.indicator.set_color(color, &mut self.host);
        self.indicator.set_blinking(&mut self.ctx, blinking);
    }

    fn begin_transport(&mut self, waypoint: Waypoint) {
        let target = self.config.waypoint(waypoint);
        self.transport.begin_move(waypoint, target);
        self.ctx.motion_in_progress = true;
    }
}
