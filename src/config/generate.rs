pub fn generate_starter_config() -> String {
    r#"# =============================================================================
# TRIP PRODUCER CONFIGURATION
# =============================================================================
# Loads a JSON array of taxi trips once and republishes it to a queue in
# fixed-size batches, wrapping around to the first trip forever.
#
# Config file locations (in order of precedence):
#   1. Path specified via --config argument
#   2. ~/.config/trip-producer/config.yml
#   3. /etc/trip-producer/config.yml
#
# Any value may reference an environment variable as $env{<NAME>}.

# =============================================================================
# SOURCE
# =============================================================================
source:
  # JSON array of trip objects; every field is a string
  path: data/trips.json

# =============================================================================
# QUEUE
# =============================================================================
# type: sqs   Amazon SQS SendMessageBatch. Credentials come from the standard
#             AWS chain (environment, profile, instance role).
# type: http  POST {"entries": [{"id": ..., "body": ...}]} to a URL.
queue:
  type: sqs
  url: https://sqs.us-east-1.amazonaws.com/123456789012/trips
  # region: us-east-1

# queue:
#   type: http
#   url: http://localhost:8080/trips
#   timeout: 30s

# =============================================================================
# PUBLISHER
# =============================================================================
publisher:
  # Trips per batch (SQS allows at most 10)
  batch_size: 5
  # Delay between batches
  interval: 1s
  # Trailing trips that don't fill a batch:
  #   skip  wrap to the start before reaching them
  #   send  send them as a short batch, then wrap
  remainder: skip
  # Length of generated per-message ids (SQS allows at most 80)
  message_id_length: 80
"#
    .to_string()
}
