//! `simulate` command: drive a full session with a synthetic observer.
//!
//! Walks an observer north from the start coordinate in fixed steps,
//! feeding pose events into a real [`ArSession`] and logging every anchor
//! request that comes out the renderer side. Data comes from a built-in
//! Zürich fixture set, or from the configured REST backend with
//! `--remote`.

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use clap::Args;
use tokio::sync::mpsc;
use tracing::{info, warn};

use arlandmarks::config::AppConfig;
use arlandmarks::geo::GeoPoint;
use arlandmarks::observer::{ObserverEvent, ObserverPose};
use arlandmarks::session::ArSession;
use arlandmarks::source::{
    DataSourceError, ReqwestClient, RestLandmarkSource, StaticLandmarkSource,
};
use arlandmarks::store::{Category, Landmark, LandmarkId, LandmarkStore};
use arlandmarks::weather::{Weather, WeatherService};

/// Meters per degree of latitude, good enough for the synthetic walk.
const METERS_PER_DEG_LAT: f64 = 111_320.0;

#[derive(Args)]
pub struct SimulateArgs {
    /// Start latitude in degrees.
    #[arg(long, default_value_t = 47.3769)]
    lat: f64,

    /// Start longitude in degrees.
    #[arg(long, default_value_t = 8.5417)]
    lon: f64,

    /// Number of pose samples to feed.
    #[arg(long, default_value_t = 20)]
    steps: u32,

    /// Meters walked north per sample.
    #[arg(long, default_value_t = 15.0)]
    step_meters: f64,

    /// Milliseconds between samples.
    #[arg(long, default_value_t = 100)]
    interval_ms: u64,

    /// Proximity radius override in meters.
    #[arg(long)]
    radius: Option<f64>,

    /// Fetch landmarks from the configured REST backend instead of the
    /// built-in fixture set.
    #[arg(long)]
    remote: bool,
}

pub async fn run(config: AppConfig, args: SimulateArgs) -> Result<(), Box<dyn Error>> {
    let mut session_config = config.session.clone();
    if let Some(radius) = args.radius {
        session_config = session_config.with_radius_meters(radius);
    }

    let store = LandmarkStore::new();
    let (session, mut anchors) = ArSession::new(store, session_config);

    load_landmarks(&config, &session, args.remote).await?;
    report_weather(&config, args.lat, args.lon).await;

    // Renderer stand-in: log each anchor request as it arrives.
    let renderer = tokio::spawn(async move {
        let mut created = 0u64;
        while let Some(placement) = anchors.recv().await {
            info!(
                scene_id = placement.scene_identifier(),
                label = %placement.marker.label,
                color = %placement.marker.color,
                x = placement.offset.x,
                z = placement.offset.z,
                "anchor created"
            );
            created += 1;
        }
        created
    });

    let (pose_tx, pose_rx) = mpsc::unbounded_channel();
    let handle = Arc::clone(&session).start(pose_rx);

    info!(
        lat = args.lat,
        lon = args.lon,
        steps = args.steps,
        step_meters = args.step_meters,
        "starting observer walk"
    );

    for step in 0..args.steps {
        let lat = args.lat + (step as f64 * args.step_meters) / METERS_PER_DEG_LAT;
        let pose = ObserverPose::new(GeoPoint::new(lat, args.lon)).with_heading(0.0);
        pose_tx.send(ObserverEvent::Pose(pose))?;
        tokio::time::sleep(Duration::from_millis(args.interval_ms)).await;
    }

    drop(pose_tx);
    handle.await?;

    let created = renderer.await?;
    let telemetry = session.telemetry_snapshot();
    info!(
        anchors = created,
        placed = session.placed_count(),
        poses_received = telemetry.poses_received,
        poses_accepted = telemetry.poses_accepted,
        already_placed = telemetry.already_placed,
        heading_deg = session.heading_deg(),
        "simulation finished"
    );

    Ok(())
}

/// Populate the session store, remotely or from the fixture set.
async fn load_landmarks(
    config: &AppConfig,
    session: &Arc<ArSession>,
    remote: bool,
) -> Result<(), Box<dyn Error>> {
    if remote {
        if !config.datasource.is_configured() {
            return Err("remote mode needs [datasource] url and api_key configured".into());
        }

        let url = config.datasource.url.clone();
        let api_key = config.datasource.api_key.clone();
        let session = Arc::clone(session);

        // The REST client is blocking; keep it off the async runtime.
        tokio::task::spawn_blocking(move || -> Result<(), DataSourceError> {
            let source = RestLandmarkSource::new(url, api_key, ReqwestClient::new()?);
            session.refresh(&source)
        })
        .await??;
    } else {
        let (landmarks, categories) = zurich_fixtures();
        session.refresh(&StaticLandmarkSource::new(landmarks, categories))?;
    }

    info!(landmarks = session.store().all().len(), "landmark set loaded");
    Ok(())
}

/// Log current conditions at the start coordinate, when configured.
async fn report_weather(config: &AppConfig, lat: f64, lon: f64) {
    if config.weather.api_key.is_empty() {
        return;
    }

    let api_key = config.weather.api_key.clone();
    let lookup = tokio::task::spawn_blocking(move || -> Result<Weather, String> {
        let client = ReqwestClient::new().map_err(|e| e.to_string())?;
        WeatherService::new(api_key, client)
            .fetch(lat, lon)
            .map_err(|e| e.to_string())
    })
    .await;

    match lookup {
        Ok(Ok(weather)) => info!(
            temperature = %weather.temperature_formatted(),
            conditions = %weather.description,
            emoji = weather.icon_emoji(),
            "current weather"
        ),
        Ok(Err(error)) => warn!(error = %error, "weather lookup failed"),
        Err(error) => warn!(%error, "weather task failed"),
    }
}

/// Built-in Zürich old-town data set for offline simulation.
fn zurich_fixtures() -> (Vec<Landmark>, Vec<Category>) {
    let church = Category {
        id: "cat-church".to_string(),
        name: "Kirche".to_string(),
        color: "#EF4444".to_string(),
        icon: "⛪".to_string(),
        sort_order: 1,
    };
    let museum = Category {
        id: "cat-museum".to_string(),
        name: "Museum".to_string(),
        color: "#8B5CF6".to_string(),
        icon: "🏛️".to_string(),
        sort_order: 2,
    };

    let landmark = |id: &str, name: &str, lat: f64, lon: f64, alt: f64, category: Option<Category>, year: Option<i32>| Landmark {
        id: LandmarkId::new(id),
        name: name.to_string(),
        latitude: lat,
        longitude: lon,
        altitude: alt,
        description: None,
        year_built: year,
        architect: None,
        category,
        is_active: true,
    };

    let landmarks = vec![
        landmark("lm-grossmuenster", "Grossmünster", 47.3702, 8.5442, 410.0, Some(church.clone()), Some(1220)),
        landmark("lm-fraumuenster", "Fraumünster", 47.3700, 8.5410, 408.0, Some(church.clone()), Some(874)),
        landmark("lm-stpeter", "St. Peter", 47.3710, 8.5406, 409.0, Some(church.clone()), None),
        landmark("lm-landesmuseum", "Landesmuseum", 47.3790, 8.5403, 403.0, Some(museum.clone()), Some(1898)),
        landmark("lm-kunsthaus", "Kunsthaus", 47.3702, 8.5481, 412.0, Some(museum.clone()), Some(1910)),
        landmark("lm-lindenhof", "Lindenhof", 47.3730, 8.5408, 428.0, None, None),
    ];

    (landmarks, vec![church, museum])
}
