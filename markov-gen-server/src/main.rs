use std::path::Path;
use std::sync::RwLock;

use actix_cors::Cors;
use actix_web::{get, put, web, App, HttpResponse, HttpServer, Responder};
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use serde::Deserialize;
use markov_gen_core::io::{get_filename, join_words, list_files, read_file, tokenize};
use markov_gen_core::model::chain_builder::{ChainBuilder, TransitionTable};
use markov_gen_core::model::generation_input::{GenerationInput, StartKey};
use markov_gen_core::model::generator::TextGenerator;
use markov_gen_core::ModelError;

const DATA_FOLDER: &str = "./data";

/// Struct representing query parameters for the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	max_words: Option<usize>,
	seed: Option<u64>,
	start: Option<String> // "word1 word2", random key if absent
}

#[derive(Deserialize)]
struct ModelQuery {
	name: Option<String>
}

/// Transition table of the currently loaded corpus.
///
/// Built once per load and only read afterwards, so generation takes the
/// read side of the lock and requests walk it concurrently.
#[derive(Default)]
struct SharedData {
	model: Option<LoadedModel>
}

struct LoadedModel {
	name: String,
	table: TransitionTable
}

impl GenerateParams {
	/// Converts query parameters into a `GenerationInput`.
	fn generation_input(&self) -> Result<GenerationInput, ModelError> {
		let mut input = GenerationInput::new();
		input.set_max_words(self.max_words)?;
		input.start_key = match &self.start {
			Some(s) => StartKey::Custom(s.clone()),
			None => StartKey::Random,
		};
		Ok(input)
	}
}

fn load_model<P: AsRef<Path>>(path: P) -> Result<LoadedModel, ModelError> {
	let text = read_file(&path)?;
	let table = ChainBuilder::build(&tokenize(&text));
	Ok(LoadedModel { name: get_filename(&path)?, table })
}

/// HTTP GET endpoint `/v1/generate`
///
/// Walks the loaded table and returns the generated text as the response body.
#[get("/v1/generate")]
async fn get_generated(data: web::Data<RwLock<SharedData>>, query: web::Query<GenerateParams>) -> impl Responder {
	let input = match query.generation_input() {
		Ok(input) => input,
		Err(e) => return HttpResponse::BadRequest().body(e.to_string())
	};

	let shared_data = match data.read() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};

	let model = match &shared_data.model {
		Some(model) => model,
		None => return HttpResponse::NotFound().body("No model loaded"),
	};

	let generator = TextGenerator::new(&model.table);
	let result = match query.seed {
		Some(seed) => generator.predict(&input, &mut StdRng::seed_from_u64(seed)),
		None => generator.predict(&input, &mut rand::rng()),
	};

	match result {
		Ok(words) => HttpResponse::Ok().body(join_words(&words)),
		Err(e @ (ModelError::EmptyModel | ModelError::UnknownKey { .. } | ModelError::InvalidStartKey(_))) => {
			HttpResponse::BadRequest().body(e.to_string())
		}
		Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
	}
}

/// HTTP GET endpoint `/v1/stats`
///
/// Returns a JSON summary of the loaded table.
#[get("/v1/stats")]
async fn get_stats(data: web::Data<RwLock<SharedData>>) -> impl Responder {
	let shared_data = match data.read() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};
	match &shared_data.model {
		Some(model) => HttpResponse::Ok().json(model.table.stats()),
		None => HttpResponse::NotFound().body("No model loaded"),
	}
}

#[get("/v1/models")]
async fn get_models() -> impl Responder {
	match list_files(DATA_FOLDER, "txt") {
		Ok(files) => HttpResponse::Ok().body(files.join("\n").replace(".txt", "")),
		Err(_) => HttpResponse::InternalServerError().body("Failed to list models")
	}
}

#[get("/v1/loaded_model")]
async fn get_loaded_model(data: web::Data<RwLock<SharedData>>) -> impl Responder {
	let shared_data = match data.read() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};
	match &shared_data.model {
		Some(model) => HttpResponse::Ok().body(model.name.clone()),
		None => HttpResponse::NotFound().body("No model loaded"),
	}
}

/// HTTP PUT endpoint `/v1/load_model`
///
/// Builds a new table from `./data/<name>.txt` and replaces the current one.
/// The table is built before the write lock is taken.
#[put("/v1/load_model")]
async fn put_model(data: web::Data<RwLock<SharedData>>, query: web::Query<ModelQuery>) -> impl Responder {
	let name = match &query.name {
		Some(s) if !s.trim().is_empty() => s.trim(),
		_ => return HttpResponse::BadRequest().body("Missing or empty model name"),
	};
	if name.contains(['/', '\\']) || name.starts_with('.') {
		return HttpResponse::BadRequest().body("Invalid model name");
	}

	let model_path = Path::new(DATA_FOLDER).join(format!("{name}.txt"));
	let model = match load_model(&model_path) {
		Ok(m) => m,
		Err(ModelError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
			return HttpResponse::NotFound().body(format!("Model {name} not found"))
		}
		Err(e) => return HttpResponse::InternalServerError().body(format!("Failed to load model: {e}"))
	};
	if model.table.is_empty() {
		warn!("Model {name} is too short to generate text");
	}
	info!("Loaded model {name}: {} keys", model.table.len());

	let mut shared_data = match data.write() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};
	shared_data.model = Some(model);

	HttpResponse::Ok().body("Model loaded successfully")
}

/// Main entry point for the server.
///
/// Wraps the shared table in a `RwLock` and starts an Actix-web HTTP server.
///
/// # Notes
/// - The server binds to 127.0.0.1:5000.
/// - Corpora are `.txt` files in `./data`; none is loaded at startup.
/// - Log level is controlled by `RUST_LOG` (default `info`).
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let shared_model = web::Data::new(RwLock::new(SharedData::default()));

	info!("Listening on 127.0.0.1:5000");
	HttpServer::new(move || {
		App::new()
			.wrap(Cors::permissive())
			.app_data(shared_model.clone())
			.service(get_generated)
			.service(get_stats)
			.service(get_models)
			.service(put_model)
			.service(get_loaded_model)
	})
		.bind(("127.0.0.1", 5000))?
		.run()
		.await
}

#[cfg(test)]
mod tests {
	use super::*;
	use actix_web::http::StatusCode;
	use actix_web::test;

	fn shared(text: &str) -> web::Data<RwLock<SharedData>> {
		let table = ChainBuilder::build(&tokenize(text));
		web::Data::new(RwLock::new(SharedData {
			model: Some(LoadedModel { name: "test".to_owned(), table }),
		}))
	}

	#[actix_web::test]
	async fn test_generate_two_words() {
		let app = test::init_service(App::new().app_data(shared("hello world")).service(get_generated)).await;
		let req = test::TestRequest::get().uri("/v1/generate").to_request();
		let body = test::call_and_read_body(&app, req).await;
		assert_eq!(body, "hello world");
	}

	#[actix_web::test]
	async fn test_generate_with_start_and_guard() {
		let app = test::init_service(App::new().app_data(shared("a b a b a b c")).service(get_generated)).await;
		let req = test::TestRequest::get().uri("/v1/generate?start=b%20c&seed=1").to_request();
		assert_eq!(test::call_and_read_body(&app, req).await, "b c");

		let req = test::TestRequest::get().uri("/v1/generate?start=a%20b&max_words=2").to_request();
		assert_eq!(test::call_and_read_body(&app, req).await, "a b");
	}

	#[actix_web::test]
	async fn test_generate_bad_parameters() {
		let app = test::init_service(App::new().app_data(shared("a b a b a b c")).service(get_generated)).await;

		for uri in [
			"/v1/generate?max_words=1",
			"/v1/generate?start=c%20a",
			"/v1/generate?start=a",
			"/v1/generate?start=%20",
			"/v1/generate?start=",
		] {
			let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
			assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
		}
	}

	#[actix_web::test]
	async fn test_generate_empty_model() {
		let app = test::init_service(App::new().app_data(shared("alone")).service(get_generated)).await;
		let resp = test::call_service(&app, test::TestRequest::get().uri("/v1/generate").to_request()).await;
		assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
		let body = test::read_body(resp).await;
		assert!(String::from_utf8_lossy(&body).contains("too short"));
	}

	#[actix_web::test]
	async fn test_no_model_loaded() {
		let data = web::Data::new(RwLock::new(SharedData::default()));
		let app = test::init_service(
			App::new().app_data(data).service(get_generated).service(get_loaded_model),
		)
		.await;

		for uri in ["/v1/generate", "/v1/loaded_model"] {
			let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
			assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
		}
	}

	#[actix_web::test]
	async fn test_stats() {
		let app = test::init_service(
			App::new().app_data(shared("hi there mary hi there juanita")).service(get_stats),
		)
		.await;
		let req = test::TestRequest::get().uri("/v1/stats").to_request();
		let body = test::call_and_read_body(&app, req).await;
		let body = String::from_utf8_lossy(&body);
		assert!(body.contains("\"key_count\":4"), "{body}");
		assert!(body.contains("\"transition_count\":5"), "{body}");
	}

	#[actix_web::test]
	async fn test_load_model_rejects_paths() {
		let data = web::Data::new(RwLock::new(SharedData::default()));
		let app = test::init_service(App::new().app_data(data).service(put_model)).await;

		for uri in ["/v1/load_model", "/v1/load_model?name=..%2Fsecret", "/v1/load_model?name=%20"] {
			let resp = test::call_service(&app, test::TestRequest::put().uri(uri).to_request()).await;
			assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
		}
	}
}
