use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, put, web};

use randwrite_core::io::{list_files, read_content};
use randwrite_core::model::frequency_table::FrequencyTable;
use randwrite_core::model::generator::generate_text;
use serde::Deserialize;

/// Struct representing query parameters for the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	length: usize,
}

/// Struct representing query parameters for the `/v1/source` endpoint
#[derive(Deserialize)]
struct SourceParams {
	name: String,
	k: usize,
}

/// A source text held in memory together with its frequency model.
struct LoadedModel {
	name: String,
	content: Vec<char>,
	table: FrequencyTable,
}

struct SharedData {
	model: Option<LoadedModel>,
}

/// HTTP GET endpoint `/v1/generate`
///
/// Generates `length` characters from the loaded model and returns them
/// as the response body. Fails with 400 while no source is loaded.
#[get("/v1/generate")]
async fn get_generated(data: web::Data<Mutex<SharedData>>, query: web::Query<GenerateParams>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};

	match &shared_data.model {
		Some(model) => {
			let text = generate_text(
				&model.content,
				&model.table,
				model.table.k(),
				query.length,
				&mut rand::rng(),
			);
			HttpResponse::Ok().body(text)
		}
		None => HttpResponse::BadRequest().body("No source loaded, PUT /v1/source first"),
	}
}

#[get("/v1/sources")]
async fn get_sources() -> impl Responder {
	match list_files("./data", "txt") {
		Ok(files) => HttpResponse::Ok().body(files.join("\n")),
		Err(_) => HttpResponse::InternalServerError().body("Failed to list sources"),
	}
}

#[get("/v1/model")]
async fn get_model(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};

	match &shared_data.model {
		Some(model) => HttpResponse::Ok().body(format!(
			"{}: k = {}, {} seeds, {} observed transitions",
			model.name,
			model.table.k(),
			model.table.seed_count(),
			model.table.observations()
		)),
		None => HttpResponse::Ok().body("No source loaded"),
	}
}

/// HTTP PUT endpoint `/v1/source`
///
/// Reads `./data/<name>.txt`, builds the frequency model for the requested
/// order `k`, and replaces the shared model. The order must be strictly
/// smaller than the source length in characters.
#[put("/v1/source")]
async fn put_source(data: web::Data<Mutex<SharedData>>, query: web::Query<SourceParams>) -> impl Responder {
	let name = query.name.trim();
	if name.is_empty() {
		return HttpResponse::BadRequest().body("Missing or empty source name");
	}

	let content = match read_content(format!("./data/{name}.txt")) {
		Ok(c) => c,
		Err(e) => return HttpResponse::InternalServerError().body(format!("Failed to read source: {e}")),
	};

	if query.k >= content.len() {
		return HttpResponse::BadRequest().body(format!(
			"k must be smaller than the source length (k = {}, source = {} characters)",
			query.k,
			content.len()
		));
	}

	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};

	let table = FrequencyTable::build(&content, query.k);
	shared_data.model = Some(LoadedModel {
		name: name.to_owned(),
		content,
		table,
	});

	HttpResponse::Ok().body("Source loaded successfully")
}

/// Main entry point for the server.
///
/// Starts with no model loaded, wraps the shared state in a `Mutex`, and
/// serves the generation endpoints over Actix-web.
///
/// # Notes
/// - The server binds to 127.0.0.1:5000.
/// - Source texts are read from the hardcoded `./data` directory.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	let shared_data = SharedData { model: None };
	let shared_model = web::Data::new(Mutex::new(shared_data));

	HttpServer::new(move || {
		App::new()
			.wrap(Cors::permissive())
			.app_data(shared_model.clone())
			.service(get_generated)
			.service(get_sources)
			.service(get_model)
			.service(put_source)
	})
		.bind(("127.0.0.1", 5000))?
		.run()
		.await
}
